//! View orchestrator: composes the three loaders and the approval mutator
//! into the single source of truth the presentation shell renders.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::request::TRANSACTIONS_PREFIX;
use crate::api::{ApiRequest, Backend, Employee, Transaction};
use crate::approval;
use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::FetchError;
use crate::loaders::{
  EmployeesLoader, PaginatedTransactionsLoader, TransactionsByEmployeeLoader,
};

/// Which loader currently owns the displayed transactions.
///
/// The tag is authoritative: even if both loaders transiently hold data, the
/// accessors only read from the loader this variant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
  /// Nothing loaded yet.
  Empty,
  /// The unfiltered, paginated list.
  All,
  /// The complete list for one employee.
  ByEmployee { employee_id: String },
}

/// The data-access entry point for the transaction-review UI.
///
/// Owns the shared response cache, the three loaders, and the view state
/// machine: "all transactions" grows page by page via [`App::load_more`],
/// selecting an employee swaps to the filtered list and invalidates the
/// paginated one, and selecting the no-filter sentinel swaps back and
/// restarts pagination at the default page size.
///
/// All methods take `&mut self` and issue their backend requests
/// sequentially, never concurrently, so employees are always available
/// before a transaction render needs them.
pub struct App {
  backend: Arc<dyn Backend>,
  cache: ResponseCache,
  employees: EmployeesLoader,
  paginated: PaginatedTransactionsLoader,
  by_employee: TransactionsByEmployeeLoader,
  page_size: u64,
  num_per_page: u64,
  is_loading: bool,
  show_more: bool,
  view: ActiveView,
}

impl App {
  pub fn new(backend: Arc<dyn Backend>, config: &Config) -> Self {
    Self::with_cache(backend, config, ResponseCache::new())
  }

  /// Construct with an injected cache, shared with or isolated from other
  /// `App` instances as the caller decides.
  pub fn with_cache(backend: Arc<dyn Backend>, config: &Config, cache: ResponseCache) -> Self {
    let page_size = config.page_size;
    Self {
      employees: EmployeesLoader::new(backend.clone(), cache.clone()),
      paginated: PaginatedTransactionsLoader::new(backend.clone(), cache.clone(), page_size),
      by_employee: TransactionsByEmployeeLoader::new(backend.clone(), cache.clone()),
      backend,
      cache,
      page_size,
      num_per_page: page_size,
      is_loading: false,
      show_more: false,
      view: ActiveView::Empty,
    }
  }

  /// Initial load: if employees are not loaded yet, fetch them and the first
  /// transaction page at the default page size. A second call with employees
  /// already present is a no-op.
  pub async fn mount(&mut self) -> Result<(), FetchError> {
    if self.employees().is_some() {
      return Ok(());
    }
    self.load_all_transactions(self.page_size).await?;
    self.num_per_page = self.page_size;
    Ok(())
  }

  /// Handle an employee-selection event. `None` is the no-filter sentinel:
  /// it restarts the unfiltered view from the first page with the page count
  /// reset to the default.
  pub async fn select_employee(&mut self, employee_id: Option<&str>) -> Result<(), FetchError> {
    match employee_id {
      None => {
        self.load_all_transactions(self.page_size).await?;
        self.num_per_page = self.page_size;
        Ok(())
      }
      Some(id) => self.load_transactions_by_employee(id).await,
    }
  }

  /// Handle a "view more" click: grow the page-count target by one page and
  /// re-run the paginated sequence. The loader walks its accumulated cursor,
  /// so only the missing tail is actually requested. No-op while the
  /// filtered view is active or when no pages remain.
  pub async fn load_more(&mut self) -> Result<(), FetchError> {
    if self.view != ActiveView::All || !self.show_more {
      return Ok(());
    }
    let target = self.num_per_page + self.page_size;
    self.load_all_transactions(target).await?;
    self.num_per_page = target;
    Ok(())
  }

  async fn load_all_transactions(&mut self, total: u64) -> Result<(), FetchError> {
    self.is_loading = true;
    self.by_employee.invalidate_data();
    self.view = ActiveView::All;

    let employees = self.employees.fetch_all(None, false).await;
    self.is_loading = false;
    employees?;

    self.paginated.fetch_all(total, false).await?;
    self.show_more = self.paginated.has_more();
    Ok(())
  }

  async fn load_transactions_by_employee(&mut self, employee_id: &str) -> Result<(), FetchError> {
    self.paginated.invalidate_data();
    self.by_employee.invalidate_data();
    self.show_more = false;
    self.view = ActiveView::ByEmployee {
      employee_id: employee_id.to_string(),
    };

    self.is_loading = true;
    let result = self.by_employee.fetch_by_id(employee_id, false).await;
    self.is_loading = false;
    result
  }

  /// Persist an approval toggle, then write it through to the active
  /// loader's data and every cached transaction response. On failure nothing
  /// local changes and the UI keeps showing the old value.
  pub async fn set_transaction_approval(
    &mut self,
    transaction_id: &str,
    new_value: bool,
  ) -> Result<(), FetchError> {
    let request = ApiRequest::SetTransactionApproval {
      transaction_id: transaction_id.to_string(),
      approved: new_value,
    };
    self.backend.request(&request).await?;

    let in_paginated = self.paginated.apply_approval(transaction_id, new_value);
    let in_filtered = self.by_employee.apply_approval(transaction_id, new_value);
    if !in_paginated && !in_filtered {
      warn!(transaction_id, "approval persisted but no loaded transaction matched");
    }

    self.cache.update_matching(TRANSACTIONS_PREFIX, |_, value| {
      approval::patch_response(value, transaction_id, new_value);
    });
    debug!(transaction_id, new_value, "approval written through");
    Ok(())
  }

  /// Drop every cached response. Loader data stays as-is; the next fetch for
  /// any request goes to the network.
  pub fn clear_cache(&self) {
    self.cache.clear();
  }

  // Outbound state for the presentation shell.

  pub fn employees(&self) -> Option<&[Employee]> {
    self.employees.data()
  }

  /// The currently active view's transaction list, or `None` before any load
  /// (and after an invalidation that has not been refilled yet).
  pub fn transactions(&self) -> Option<&[Transaction]> {
    match &self.view {
      ActiveView::Empty => None,
      ActiveView::All => self.paginated.transactions(),
      ActiveView::ByEmployee { .. } => self.by_employee.data(),
    }
  }

  pub fn is_loading(&self) -> bool {
    self.is_loading
  }

  /// Whether the "view more" control should be visible. Never true while the
  /// filtered view is active; turns false once the paginated loader reports
  /// no further pages.
  pub fn show_more_available(&self) -> bool {
    self.show_more
  }

  pub fn view(&self) -> &ActiveView {
    &self.view
  }

  #[cfg(test)]
  pub(crate) fn paginated_data_is_none(&self) -> bool {
    self.paginated.data().is_none()
  }
}
