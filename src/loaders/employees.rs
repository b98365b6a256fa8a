//! Loader for the full employee list.

use std::sync::Arc;

use crate::api::request::EMPLOYEES_KEY;
use crate::api::{ApiRequest, Backend, Employee};
use crate::cache::ResponseCache;
use crate::error::FetchError;

use super::fetch_response;

/// Fetches the employee list once, in full. The list is immutable for the
/// life of the session; it is only ever replaced wholesale by a refetch.
pub struct EmployeesLoader {
  backend: Arc<dyn Backend>,
  cache: ResponseCache,
  data: Option<Vec<Employee>>,
  loading: bool,
}

impl EmployeesLoader {
  pub fn new(backend: Arc<dyn Backend>, cache: ResponseCache) -> Self {
    Self {
      backend,
      cache,
      data: None,
      loading: false,
    }
  }

  /// Load the employee list, cache-first when `use_cache` is set.
  ///
  /// `_limit` is accepted for interface symmetry with the transaction
  /// loaders; the employee list is always fetched in full.
  pub async fn fetch_all(&mut self, _limit: Option<u64>, use_cache: bool) -> Result<(), FetchError> {
    self.loading = true;
    let result = self.fetch_inner(use_cache).await;
    self.loading = false;
    result
  }

  async fn fetch_inner(&mut self, use_cache: bool) -> Result<(), FetchError> {
    let value = fetch_response(
      self.backend.as_ref(),
      &self.cache,
      &ApiRequest::Employees,
      use_cache,
    )
    .await?;

    self.data = Some(serde_json::from_value(value)?);
    Ok(())
  }

  /// Reset `data` and drop the cached employee list.
  pub fn invalidate_data(&mut self) {
    self.data = None;
    self.cache.invalidate(EMPLOYEES_KEY);
  }

  pub fn data(&self) -> Option<&[Employee]> {
    self.data.as_deref()
  }

  pub fn loading(&self) -> bool {
    self.loading
  }
}
