//! A single layer of key-value state.

use std::collections::HashMap;

/// One level of the transaction stack.
///
/// Cloning a level produces an independent deep copy; this is how a new
/// transaction snapshots its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    entries: HashMap<String, String>,
}

impl Level {
    /// Create an empty level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a key, returning its old value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Number of keys whose value equals `value`.
    pub fn count_value(&self, value: &str) -> usize {
        self.entries.values().filter(|v| v.as_str() == value).count()
    }

    /// Number of keys in the level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the level holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
