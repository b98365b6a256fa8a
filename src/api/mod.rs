//! Wire types, request identity, and the backend transport.

mod client;
pub(crate) mod request;
mod types;

pub use client::{Backend, HttpBackend};
pub use request::ApiRequest;
pub use types::{Employee, EmployeeRef, PaginatedResponse, Transaction};
