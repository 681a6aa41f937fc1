//! In-memory store.

use std::collections::HashMap;

use crate::{KvError, StringStore};

/// A process-local store backed by a `HashMap`.
///
/// Entries live as long as the store value itself. This is the in-memory
/// fake used throughout the test suites, and also a reasonable
/// session-scoped store when durability is not wanted.
///
/// # Example
///
/// ```rust
/// use surface_kv::{MemoryStore, StringStore};
///
/// let mut store = MemoryStore::new();
/// store.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringStore for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        self.entries.remove(key);
        Ok(())
    }
}
