//! Accumulated metadata with a cached rendering

use crate::metadata::types::{Metadata, MetadataValue};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct CacheState {
    metadata: Metadata,
    rendered: Option<String>,
}

/// Per-handler metadata store.
///
/// Every mutation recomputes the rendered form so `log` only reads a string.
/// Reads and writes are serialized by an internal lock; a poisoned lock is
/// recovered rather than surfaced.
#[derive(Debug, Default)]
pub struct MetadataCache {
    state: RwLock<CacheState>,
}

impl MetadataCache {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `metadata`
    pub fn from_metadata(metadata: Metadata) -> Self {
        let rendered = metadata.render();
        Self {
            state: RwLock::new(CacheState { metadata, rendered }),
        }
    }

    /// Get a single value
    pub fn get(&self, key: &str) -> Option<MetadataValue> {
        self.read().metadata.get(key).cloned()
    }

    /// Set a single value, `None` removes the key
    pub fn set(&self, key: &str, value: Option<MetadataValue>) {
        let mut state = self.write();
        match value {
            Some(value) => {
                state.metadata.insert(key, value);
            }
            None => {
                state.metadata.remove(key);
            }
        }
        state.rendered = state.metadata.render();

        tracing::trace!(
            key = %key,
            entries = state.metadata.len(),
            "Accumulated metadata updated"
        );
    }

    /// Snapshot of the whole mapping
    pub fn snapshot(&self) -> Metadata {
        self.read().metadata.clone()
    }

    /// Replace the whole mapping
    pub fn replace(&self, metadata: Metadata) {
        let mut state = self.write();
        state.rendered = metadata.render();
        state.metadata = metadata;
    }

    /// Cached rendering, `None` while the mapping is empty
    pub fn rendered(&self) -> Option<String> {
        self.read().rendered.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.read().metadata.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_cache_has_no_rendering() {
        let cache = MetadataCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.rendered(), None);
    }

    #[test]
    fn test_set_recomputes_rendering() {
        let cache = MetadataCache::new();
        cache.set("user", Some("alice".into()));
        assert_eq!(cache.rendered().as_deref(), Some("user = alice"));

        cache.set("request", Some(42.into()));
        assert_eq!(cache.rendered().as_deref(), Some("user = alice request = 42"));
        assert_eq!(cache.get("request"), Some(MetadataValue::from("42")));
    }

    #[test]
    fn test_set_none_removes_key() {
        let cache = MetadataCache::from_metadata(Metadata::new().with("a", 1).with("b", 2));
        cache.set("a", None);

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.rendered().as_deref(), Some("b = 2"));

        cache.set("b", None);
        assert_eq!(cache.rendered(), None);
    }

    #[test]
    fn test_replace() {
        let cache = MetadataCache::new();
        cache.replace(Metadata::new().with("x", "y"));
        assert_eq!(cache.snapshot(), Metadata::new().with("x", "y"));
        assert_eq!(cache.rendered().as_deref(), Some("x = y"));
    }

    #[test]
    fn test_concurrent_writers() {
        let cache = Arc::new(MetadataCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                thread::spawn(move || cache.set(&format!("k{}", i), Some(i.into())))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.snapshot().len(), 8);
        let rendered = cache.rendered().unwrap();
        assert_eq!(rendered.split(' ').filter(|t| *t == "=").count(), 8);
    }
}
