//! Request identity: one variant per downstream operation, with a
//! deterministic cache key so identical logical requests collide and distinct
//! ones never do.

/// A request to the transactions backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
  /// List all employees.
  Employees,
  /// List one page of transactions.
  TransactionsPage { page: u64, limit: u64 },
  /// List the complete transaction set for one employee (not paginated).
  TransactionsByEmployee { employee_id: String },
  /// Persist a transaction's approval flag. Write operation, never cached.
  SetTransactionApproval {
    transaction_id: String,
    approved: bool,
  },
}

/// Key prefix shared by all paginated transaction entries, used to drop the
/// whole accumulated sequence at once.
pub(crate) const TRANSACTION_PAGES_PREFIX: &str = "transactions:page=";

/// Key prefix shared by all per-employee transaction entries.
pub(crate) const TRANSACTIONS_BY_EMPLOYEE_PREFIX: &str = "transactions:employee=";

/// Key prefix covering every cached transaction response, paginated or
/// filtered. Approval write-through patches everything under it.
pub(crate) const TRANSACTIONS_PREFIX: &str = "transactions:";

pub(crate) const EMPLOYEES_KEY: &str = "employees";

impl ApiRequest {
  /// Deterministic cache key. Keys are kept readable (no hashing) so loaders
  /// can invalidate by prefix.
  pub fn cache_key(&self) -> String {
    match self {
      Self::Employees => EMPLOYEES_KEY.to_string(),
      Self::TransactionsPage { page, limit } => {
        format!("{}{}:limit={}", TRANSACTION_PAGES_PREFIX, page, limit)
      }
      Self::TransactionsByEmployee { employee_id } => {
        format!("{}{}", TRANSACTIONS_BY_EMPLOYEE_PREFIX, employee_id)
      }
      Self::SetTransactionApproval { transaction_id, approved } => {
        format!("approval:{}:{}", transaction_id, approved)
      }
    }
  }

  /// Human-readable label for log lines.
  pub fn description(&self) -> String {
    match self {
      Self::Employees => "all employees".to_string(),
      Self::TransactionsPage { page, limit } => {
        format!("transactions page {} (limit {})", page, limit)
      }
      Self::TransactionsByEmployee { employee_id } => {
        format!("transactions for employee {}", employee_id)
      }
      Self::SetTransactionApproval { transaction_id, approved } => {
        format!("set approval of {} to {}", transaction_id, approved)
      }
    }
  }
}
