//! Response cache contract and an in-memory implementation.
//!
//! The dispatcher stores the decoded `data` payload of successful,
//! non-mutation responses under the serialized request body. Values are
//! shared as `Arc<Value>`, so a cache hit hands back the very value that was
//! stored rather than a reconstruction of it.
//!
//! Eviction is entirely up to the [`Cache`] implementation. [`MemoryCache`]
//! never evicts.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use graphql_dispatch::{Cache, MemoryCache};
//! use serde_json::json;
//!
//! let cache = MemoryCache::new();
//! cache.set("key".to_string(), Arc::new(json!({"user": null})));
//! assert_eq!(cache.len(), 1);
//! assert!(cache.get("key").is_some());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

/// A key/value store for decoded response payloads.
///
/// Implementations must be safe to share across tasks. Both operations are
/// synchronous; an implementation backed by remote storage should front it
/// with a local map.
pub trait Cache: Send + Sync {
    /// Returns the payload stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Arc<Value>>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: String, value: Arc<Value>);
}

impl<C: Cache + ?Sized> Cache for Arc<C> {
    fn get(&self, key: &str) -> Option<Arc<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: String, value: Arc<Value>) {
        (**self).set(key, value);
    }
}

/// Thread-safe, unbounded in-memory cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Arc<Value>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries().clear();
    }

    // A poisoned lock still guards a complete map.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Arc<Value>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: String, value: Arc<Value>) {
        self.entries().insert(key, value);
    }
}
