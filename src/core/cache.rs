//! Process-lifetime content cache.
//!
//! Guarantees at most one network fetch per key for the life of the process
//! under sequential use. Entries are written once after a successful fetch
//! and never evicted or updated; nothing persists across restarts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ResourceCategory;

/// Key for a cached document.
///
/// The samples index gets its own variant rather than a sentinel string, so
/// no file identifier can ever alias it. File keys are namespaced by their
/// resource category: the same relative path under two categories is two
/// independent entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The samples-list index document
    SamplesIndex,

    /// One sample file, namespaced by resource category
    File {
        resource: ResourceCategory,
        path: String,
    },
}

impl CacheKey {
    /// Key for a sample file under a resource category
    pub fn file(resource: ResourceCategory, path: impl Into<String>) -> Self {
        Self::File {
            resource,
            path: path.into(),
        }
    }
}

/// In-memory map of fetched documents, shared by handle.
///
/// Clones share the same underlying map. Concurrent misses on the same key
/// may both fetch; the later insert wins, with identical content since both
/// fetched the same remote file. The lock is only held for map access,
/// never across an await.
#[derive(Debug, Clone, Default)]
pub struct ContentCache {
    entries: Arc<RwLock<HashMap<CacheKey, String>>>,
}

impl ContentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously fetched document
    pub fn try_get(&self, key: &CacheKey) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// Record a fetched document. Only called after a successful fetch.
    pub fn insert(&self, key: CacheKey, content: String) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, content);
    }

    /// Whether a key has been cached
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
