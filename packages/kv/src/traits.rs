//! The store contract.

use crate::KvError;

/// A synchronous string key-value store.
///
/// Keys are opaque non-empty strings scoped to one store instance. Values
/// are whatever text a higher layer chooses to put there; this trait does
/// no parsing and no validation beyond moving strings in and out.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn StringStore>`.
///
/// # Example
///
/// ```rust
/// use surface_kv::{KvError, MemoryStore, StringStore};
///
/// fn remember(store: &mut dyn StringStore) -> Result<Option<String>, KvError> {
///     store.set("greeting", "hello")?;
///     store.get("greeting")
/// }
///
/// let mut store = MemoryStore::new();
/// assert_eq!(remember(&mut store).unwrap(), Some("hello".to_string()));
/// ```
pub trait StringStore: Send + Sync {
    /// Read the value stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No entry for `key` (not an error condition).
    /// * `Ok(Some(value))` - The stored string.
    /// * `Err(KvError)` - The environment failed or refused the read.
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError>;

    /// Insert or overwrite the value stored at `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove the entry for `key`, if any.
    ///
    /// Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), KvError>;
}

// Blanket implementations for references and boxes

impl<T: StringStore + ?Sized> StringStore for &mut T {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        (*self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        (*self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        (*self).remove(key)
    }
}

impl<T: StringStore + ?Sized> StringStore for Box<T> {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        self.as_mut().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.as_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        self.as_mut().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn object_safety_works() {
        let mut store = MemoryStore::new();
        let boxed: &mut dyn StringStore = &mut store;

        boxed.set("k", "v").unwrap();
        assert_eq!(boxed.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn mut_ref_blanket_impl_works() {
        let mut store = MemoryStore::new();
        let store_ref: &mut MemoryStore = &mut store;

        store_ref.set("ref", "data").unwrap();
        assert_eq!(store_ref.get("ref").unwrap(), Some("data".to_string()));
    }

    #[test]
    fn box_dyn_works() {
        let mut boxed: Box<dyn StringStore> = Box::new(MemoryStore::new());

        boxed.set("boxed", "data").unwrap();
        boxed.remove("boxed").unwrap();
        assert_eq!(boxed.get("boxed").unwrap(), None);
    }
}
