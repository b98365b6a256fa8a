//! Loaders: each owns one piece of fetched state plus its loading and
//! invalidation lifecycle.
//!
//! All three follow the same contract: `data` is `None` before the first
//! load, `loading` is true strictly between request dispatch and settlement,
//! and `invalidate_data()` synchronously resets `data` and drops the loader's
//! cache entries. Invalidation gives no cancellation guarantee — a request
//! already in flight still resolves and, unless its caller discards the
//! result, may repopulate state afterwards. Within one task the `&mut self`
//! methods cannot interleave, but a loader shared across tasks inherits that
//! documented race.

mod by_employee;
mod employees;
mod paginated;

pub use by_employee::TransactionsByEmployeeLoader;
pub use employees::EmployeesLoader;
pub use paginated::PaginatedTransactionsLoader;

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiRequest, Backend};
use crate::cache::ResponseCache;
use crate::error::FetchError;

/// Cache-or-network fetch shared by the loaders.
///
/// When `use_cache` is set and the entry exists, the cached response is
/// served without touching the network. Network responses are written through
/// to the cache either way, so a bypassing call still refreshes the entry.
pub(crate) async fn fetch_response(
  backend: &dyn Backend,
  cache: &ResponseCache,
  request: &ApiRequest,
  use_cache: bool,
) -> Result<Value, FetchError> {
  let key = request.cache_key();

  if use_cache {
    if let Some(cached) = cache.get(&key) {
      debug!(key = %key, "cache hit");
      return Ok(cached);
    }
  }

  debug!(request = %request.description(), "fetching from backend");
  let value = backend.request(request).await?;
  cache.set(&key, value.clone());
  Ok(value)
}
