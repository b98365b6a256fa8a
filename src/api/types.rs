use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An employee. The set is loaded in full and never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id: String,
  pub first_name: String,
  pub last_name: String,
}

impl Employee {
  pub fn display_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// Denormalized employee reference embedded in a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
  pub id: String,
  pub display_name: String,
}

/// A reviewable transaction. `approved` is the only field ever mutated after
/// it has been fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
  pub id: String,
  pub amount: f64,
  pub employee: EmployeeRef,
  pub merchant: String,
  pub date: DateTime<Utc>,
  pub approved: bool,
}

/// Envelope around one page of results.
///
/// `next_page` of `None` means the sequence is exhausted: once an accumulated
/// list carries a `None` cursor, no further fetch is attempted until the
/// sequence is invalidated and restarted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
  pub data: T,
  pub next_page: Option<u64>,
}
