//! Error taxonomy for fetch and mutation operations.
//!
//! Every failure here is locally contained to the loader that hit it: the
//! loader's `data` stays as it was, its loading flag resets, and the error
//! surfaces to the caller so the shell can display it. Nothing in this layer
//! retries automatically or aborts the process.

use thiserror::Error;

/// Errors surfaced by loaders, the orchestrator, and the HTTP backend.
#[derive(Debug, Error)]
pub enum FetchError {
  /// The request never produced a response (connection refused, timeout).
  #[error("request failed: {message}")]
  Network { message: String },

  /// The backend answered with a non-success status.
  #[error("backend returned HTTP {status}")]
  Http { status: u16 },

  /// The requested resource does not exist. Loaders that can treat absence
  /// as an empty result (an employee with no transactions) map this away.
  #[error("not found: {resource}")]
  NotFound { resource: String },

  /// The response parsed as JSON but not into the expected shape.
  #[error("failed to decode response: {0}")]
  Decode(#[from] serde_json::Error),

  /// The backend could not be constructed from the given configuration.
  #[error("invalid backend configuration: {message}")]
  Config { message: String },
}

impl FetchError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, FetchError::NotFound { .. })
  }
}
