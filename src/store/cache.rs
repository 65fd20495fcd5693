use std::collections::HashMap;

/// String key-value cache.
///
/// Values are opaque here; see [`codec`](super::codec) for the format the
/// programs agree on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache {
    entries: HashMap<String, String>,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Always succeeds in memory.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.entries.insert(key.into(), value.into());
        true
    }

    /// Removes `key`, reporting whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
