//! Shared ownership wrapper for stores.

use std::sync::{Arc, Mutex};

use crate::{KvError, StringStore};

/// A cloneable handle to a store behind an `Arc<Mutex<_>>`.
///
/// [`StringStore`](crate::StringStore) takes `&mut self`, so a plain store
/// value has exactly one owner. `SharedStore` lets several consumers (for
/// example, several persisted-value handles keyed into one namespace) talk
/// to the same underlying store. Clones refer to the same entries.
///
/// Access is serialized by the mutex; if a previous holder panicked while
/// holding it, operations report [`KvError::Poisoned`].
#[derive(Debug)]
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedStore<S> {
    /// Wrap a store for shared use.
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StringStore> StringStore for SharedStore<S> {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        self.inner
            .lock()
            .map_err(|_| KvError::Poisoned)?
            .get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.inner
            .lock()
            .map_err(|_| KvError::Poisoned)?
            .set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        self.inner
            .lock()
            .map_err(|_| KvError::Poisoned)?
            .remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn clones_share_entries() {
        let mut a = SharedStore::new(MemoryStore::new());
        let mut b = a.clone();

        a.set("shared", "yes").unwrap();
        assert_eq!(b.get("shared").unwrap(), Some("yes".to_string()));

        b.remove("shared").unwrap();
        assert_eq!(a.get("shared").unwrap(), None);
    }
}
