//! Loader for the unfiltered, paginated transaction list.

use std::sync::Arc;

use crate::api::request::TRANSACTION_PAGES_PREFIX;
use crate::api::{ApiRequest, Backend, PaginatedResponse, Transaction};
use crate::cache::ResponseCache;
use crate::error::FetchError;

use super::fetch_response;

/// Accumulates transaction pages into one ordered list.
///
/// Each successful page appends to `data` (never replaces) and advances the
/// `next_page` cursor from the newest envelope. Once an envelope reports
/// `next_page = None`, further `fetch_all` calls are no-ops until the loader
/// is invalidated and the sequence restarts from the first page.
pub struct PaginatedTransactionsLoader {
  backend: Arc<dyn Backend>,
  cache: ResponseCache,
  page_size: u64,
  data: Option<PaginatedResponse<Vec<Transaction>>>,
  loading: bool,
}

impl PaginatedTransactionsLoader {
  pub fn new(backend: Arc<dyn Backend>, cache: ResponseCache, page_size: u64) -> Self {
    Self {
      backend,
      cache,
      page_size,
      data: None,
      loading: false,
    }
  }

  /// Fetch pages along the accumulated cursor until the list holds at least
  /// `total` transactions or the backend reports no further pages.
  ///
  /// "Load more" re-triggers this with a larger total target rather than
  /// requesting a single incremental page; pages already accumulated are not
  /// refetched, so the call only walks the missing tail of the sequence.
  pub async fn fetch_all(&mut self, total: u64, use_cache: bool) -> Result<(), FetchError> {
    self.loading = true;
    let result = self.fetch_until(total, use_cache).await;
    self.loading = false;
    result
  }

  async fn fetch_until(&mut self, total: u64, use_cache: bool) -> Result<(), FetchError> {
    loop {
      let page = match &self.data {
        None => 0,
        Some(envelope) => {
          if envelope.data.len() as u64 >= total {
            return Ok(());
          }
          match envelope.next_page {
            Some(page) => page,
            // Terminal: the sequence is exhausted, nothing to request.
            None => return Ok(()),
          }
        }
      };

      let request = ApiRequest::TransactionsPage {
        page,
        limit: self.page_size,
      };
      let value = fetch_response(self.backend.as_ref(), &self.cache, &request, use_cache).await?;
      let envelope: PaginatedResponse<Vec<Transaction>> = serde_json::from_value(value)?;

      match &mut self.data {
        None => self.data = Some(envelope),
        Some(existing) => {
          existing.data.extend(envelope.data);
          existing.next_page = envelope.next_page;
        }
      }
    }
  }

  /// Whether the latest envelope reported another page.
  pub fn has_more(&self) -> bool {
    self.data.as_ref().is_some_and(|e| e.next_page.is_some())
  }

  /// Discard the accumulated list, reset the cursor to the first page, and
  /// drop the cached page entries.
  pub fn invalidate_data(&mut self) {
    self.data = None;
    self.cache.invalidate(TRANSACTION_PAGES_PREFIX);
  }

  pub fn data(&self) -> Option<&PaginatedResponse<Vec<Transaction>>> {
    self.data.as_ref()
  }

  pub fn transactions(&self) -> Option<&[Transaction]> {
    self.data.as_ref().map(|e| e.data.as_slice())
  }

  pub fn loading(&self) -> bool {
    self.loading
  }

  /// Flip the approval flag of the matching transaction in place. Order,
  /// count, and pagination metadata are untouched.
  pub(crate) fn apply_approval(&mut self, transaction_id: &str, approved: bool) -> bool {
    match &mut self.data {
      Some(envelope) => crate::approval::patch_transactions(&mut envelope.data, transaction_id, approved),
      None => false,
    }
  }
}
