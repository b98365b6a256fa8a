//! In-memory key→response store shared by all loaders.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Process-wide response cache.
///
/// Cloning the handle shares the underlying store, which is how every loader
/// ends up reading and writing the same entries. The store is explicitly
/// injected rather than a global so each test can own an isolated instance.
///
/// Entries persist until invalidated — there is no eviction by size or age.
/// Writes are last-write-wins with no partial entries; a mutation of one key
/// and a concurrent refetch of the same key settle in completion order.
#[derive(Clone, Default)]
pub struct ResponseCache {
  entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl ResponseCache {
  pub fn new() -> Self {
    Self::default()
  }

  fn entries(&self) -> MutexGuard<'_, HashMap<String, Value>> {
    // A poisoned lock only means another thread panicked mid-access; the map
    // itself is still consistent, so keep serving it.
    self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  /// Look up a cached response. Returns a clone so the caller can deserialize
  /// without holding the lock.
  pub fn get(&self, key: &str) -> Option<Value> {
    self.entries().get(key).cloned()
  }

  /// Store a response, replacing any previous entry for the key.
  pub fn set(&self, key: &str, value: Value) {
    self.entries().insert(key.to_string(), value);
  }

  /// Remove every entry whose key equals or starts with `prefix`.
  pub fn invalidate(&self, prefix: &str) {
    let mut entries = self.entries();
    let before = entries.len();
    entries.retain(|key, _| !key.starts_with(prefix));
    debug!(prefix, removed = before - entries.len(), "cache invalidated");
  }

  /// Drop every entry.
  pub fn clear(&self) {
    let mut entries = self.entries();
    let removed = entries.len();
    entries.clear();
    debug!(removed, "cache cleared");
  }

  /// Apply an in-place mutation to every cached value whose key starts with
  /// `prefix`. Used to write mutations through to cached copies instead of
  /// refetching them.
  pub fn update_matching<F>(&self, prefix: &str, mut f: F)
  where
    F: FnMut(&str, &mut Value),
  {
    let mut entries = self.entries();
    for (key, value) in entries.iter_mut() {
      if key.starts_with(prefix) {
        f(key, value);
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }
}
