//! Shared response cache for deduplicating identical requests.
//!
//! This module provides an endpoint-agnostic in-memory store that:
//! - Keys entries by a deterministic request signature (endpoint + parameters)
//! - Keeps the raw parsed response, so any loader can rehydrate from it
//! - Invalidates by exact key or key prefix, with no eviction policy
//! - Supports in-place patching of cached values for write-through mutations

mod store;

pub use store::ResponseCache;
