//! Data-access core for a transaction-review dashboard.
//!
//! This crate owns the request/cache/pagination orchestration behind the UI:
//! - Caches raw responses keyed by endpoint + parameters
//! - Accumulates paginated transaction pages into one growing list
//! - Replaces the list wholesale when filtering by a single employee
//! - Writes approval toggles through to cached data instead of refetching
//!
//! The presentation shell is an external collaborator: it calls into
//! [`App`], renders whatever the accessors return, and forwards user events
//! (employee selection, "view more", approval toggles) back in. Rendering and
//! the backend itself live elsewhere; the transport is abstracted behind the
//! [`Backend`] trait.

pub mod api;
mod app;
pub mod cache;
mod config;
mod error;
mod loaders;

mod approval;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiRequest, Backend, Employee, EmployeeRef, HttpBackend, PaginatedResponse, Transaction};
pub use app::{ActiveView, App};
pub use cache::ResponseCache;
pub use config::{ApiConfig, Config, ConfigError};
pub use error::FetchError;
pub use loaders::{EmployeesLoader, PaginatedTransactionsLoader, TransactionsByEmployeeLoader};
