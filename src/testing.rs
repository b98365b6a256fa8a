//! Test doubles shared by the unit tests: a seeded in-memory backend with a
//! request log and failure injection, plus data fixtures.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::api::{ApiRequest, Backend, Employee, EmployeeRef, PaginatedResponse, Transaction};
use crate::error::FetchError;

pub(crate) fn sample_employees() -> Vec<Employee> {
  [
    ("e1", "Ada", "Lovelace"),
    ("e2", "Grace", "Hopper"),
    ("e3", "Alan", "Turing"),
  ]
  .into_iter()
  .map(|(id, first, last)| Employee {
    id: id.to_string(),
    first_name: first.to_string(),
    last_name: last.to_string(),
  })
  .collect()
}

/// `n` unapproved transactions `t0..tn`, assigned round-robin to the sample
/// employees, one day apart.
pub(crate) fn sample_transactions(n: usize) -> Vec<Transaction> {
  let employees = sample_employees();
  let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

  (0..n)
    .map(|i| {
      let employee = &employees[i % employees.len()];
      Transaction {
        id: format!("t{}", i),
        amount: 10.0 + i as f64,
        employee: EmployeeRef {
          id: employee.id.clone(),
          display_name: employee.display_name(),
        },
        merchant: format!("Merchant {}", i % 4),
        date: start + Duration::days(i as i64),
        approved: false,
      }
    })
    .collect()
}

/// In-memory [`Backend`] over seeded data.
///
/// Records every request it receives and can be switched into a failing mode
/// where every call returns a network error.
pub(crate) struct FakeBackend {
  employees: Vec<Employee>,
  transactions: Vec<Transaction>,
  calls: Mutex<Vec<ApiRequest>>,
  fail: AtomicBool,
}

impl FakeBackend {
  /// Employees only, no transactions.
  pub fn seeded() -> Self {
    Self::new(sample_employees(), Vec::new())
  }

  /// Employees plus `n` transactions.
  pub fn with_transactions(n: usize) -> Self {
    Self::new(sample_employees(), sample_transactions(n))
  }

  fn new(employees: Vec<Employee>, transactions: Vec<Transaction>) -> Self {
    Self {
      employees,
      transactions,
      calls: Mutex::new(Vec::new()),
      fail: AtomicBool::new(false),
    }
  }

  /// When set, every subsequent request fails with a network error.
  pub fn fail_requests(&self, fail: bool) {
    self.fail.store(fail, Ordering::SeqCst);
  }

  pub fn calls(&self) -> Vec<ApiRequest> {
    self.calls.lock().expect("calls lock").clone()
  }

  pub fn request_count(&self) -> usize {
    self.calls.lock().expect("calls lock").len()
  }

  fn respond(&self, request: &ApiRequest) -> Result<Value, FetchError> {
    match request {
      ApiRequest::Employees => Ok(serde_json::to_value(&self.employees)?),
      ApiRequest::TransactionsPage { page, limit } => {
        let start = (page * limit) as usize;
        let end = start.saturating_add(*limit as usize).min(self.transactions.len());
        let data: Vec<Transaction> = self.transactions.get(start..end).unwrap_or(&[]).to_vec();
        let next_page = if end < self.transactions.len() {
          Some(page + 1)
        } else {
          None
        };
        Ok(serde_json::to_value(PaginatedResponse { data, next_page })?)
      }
      ApiRequest::TransactionsByEmployee { employee_id } => {
        if !self.employees.iter().any(|e| &e.id == employee_id) {
          return Err(FetchError::NotFound {
            resource: format!("employee {}", employee_id),
          });
        }
        let data: Vec<&Transaction> = self
          .transactions
          .iter()
          .filter(|t| &t.employee.id == employee_id)
          .collect();
        Ok(serde_json::to_value(data)?)
      }
      ApiRequest::SetTransactionApproval { transaction_id, .. } => {
        if !self.transactions.iter().any(|t| &t.id == transaction_id) {
          return Err(FetchError::NotFound {
            resource: format!("transaction {}", transaction_id),
          });
        }
        Ok(Value::Null)
      }
    }
  }
}

#[async_trait]
impl Backend for FakeBackend {
  async fn request(&self, request: &ApiRequest) -> Result<Value, FetchError> {
    self.calls.lock().expect("calls lock").push(request.clone());

    if self.fail.load(Ordering::SeqCst) {
      return Err(FetchError::Network {
        message: "connection refused".to_string(),
      });
    }

    self.respond(request)
  }
}
