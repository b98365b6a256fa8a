//! Loader for the transaction list of a single employee.

use std::sync::Arc;

use crate::api::request::TRANSACTIONS_BY_EMPLOYEE_PREFIX;
use crate::api::{ApiRequest, Backend, Transaction};
use crate::cache::ResponseCache;
use crate::error::FetchError;

use super::fetch_response;

/// Fetches the complete (non-paginated) transaction list for one employee.
///
/// Unlike the paginated loader this one has no accumulation: every successful
/// fetch replaces `data` wholesale, so switching between employees never
/// mixes their transactions.
pub struct TransactionsByEmployeeLoader {
  backend: Arc<dyn Backend>,
  cache: ResponseCache,
  data: Option<Vec<Transaction>>,
  loading: bool,
}

impl TransactionsByEmployeeLoader {
  pub fn new(backend: Arc<dyn Backend>, cache: ResponseCache) -> Self {
    Self {
      backend,
      cache,
      data: None,
      loading: false,
    }
  }

  /// Fetch the employee's transactions, replacing any previous list.
  ///
  /// An employee with no transactions is a successful empty result, not an
  /// error.
  pub async fn fetch_by_id(&mut self, employee_id: &str, use_cache: bool) -> Result<(), FetchError> {
    self.loading = true;
    let result = self.fetch_inner(employee_id, use_cache).await;
    self.loading = false;
    result
  }

  async fn fetch_inner(&mut self, employee_id: &str, use_cache: bool) -> Result<(), FetchError> {
    let request = ApiRequest::TransactionsByEmployee {
      employee_id: employee_id.to_string(),
    };

    let transactions = match fetch_response(self.backend.as_ref(), &self.cache, &request, use_cache).await {
      Ok(value) => serde_json::from_value(value)?,
      Err(err) if err.is_not_found() => Vec::new(),
      Err(err) => return Err(err),
    };

    self.data = Some(transactions);
    Ok(())
  }

  /// Reset `data` and drop the per-employee cache entries.
  pub fn invalidate_data(&mut self) {
    self.data = None;
    self.cache.invalidate(TRANSACTIONS_BY_EMPLOYEE_PREFIX);
  }

  pub fn data(&self) -> Option<&[Transaction]> {
    self.data.as_deref()
  }

  pub fn loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn apply_approval(&mut self, transaction_id: &str, approved: bool) -> bool {
    match &mut self.data {
      Some(transactions) => crate::approval::patch_transactions(transactions, transaction_id, approved),
      None => false,
    }
  }
}
