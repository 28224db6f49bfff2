//! Session-lifetime cache of preview payloads.
//!
//! Entries are added after a successful fetch and are never evicted on their
//! own; [`PreviewCache::clear`] is the only removal path.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    entries: HashMap<String, String>,
}

impl PreviewCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store `payload` under `key`, replacing any previous payload.
    pub fn insert(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.insert(key.into(), payload.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
