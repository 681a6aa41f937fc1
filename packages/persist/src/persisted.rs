//! The persisted value handle.

use serde::de::DeserializeOwned;
use serde::Serialize;

use surface_kv::StringStore;

use crate::Key;

/// An in-memory value synchronized with one store entry.
///
/// On construction the store is read once: a decodable entry overrides the
/// caller-supplied initial value, an absent entry leaves the initial value
/// in place (the store is not eagerly populated with the default). Every
/// [`set`](Persisted::set) or [`update`](Persisted::update) encodes the
/// next value, writes it to the store, and updates memory before
/// returning, so a read on this handle always observes its latest write.
///
/// # Fault tolerance
///
/// Decode, encode and store faults never surface to the caller. A corrupt
/// entry falls back to the initial value. A store that is unavailable at
/// construction disables persistence for the life of the handle; writes
/// then update memory only. All such faults are logged.
///
/// # Consistency between handles
///
/// Two handles over the same store and key do not observe each other's
/// writes; each re-reads the store only at construction. Within one
/// handle, writes apply in invocation order.
pub struct Persisted<T, S> {
    store: S,
    key: Key,
    value: T,
    initial: T,
    durable: bool,
}

impl<T, S> Persisted<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: StringStore,
{
    /// Create a handle for `key`, loading any existing entry.
    ///
    /// Construction never fails: decode faults and store unavailability
    /// degrade to `initial` (see the type-level docs).
    pub fn new(mut store: S, key: Key, initial: T) -> Self {
        let mut durable = true;

        let value = match store.get(key.as_str()) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!(
                        key = %key,
                        error = %e,
                        "stored entry is corrupt; falling back to initial value"
                    );
                    initial.clone()
                }
            },
            Ok(None) => initial.clone(),
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "store unavailable; handle is in-memory only"
                );
                durable = false;
                initial.clone()
            }
        };

        Self {
            store,
            key,
            value,
            initial,
            durable,
        }
    }

    /// The current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// The key this handle is bound to.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Whether writes on this handle reach the store.
    ///
    /// `false` once the store was found unavailable at construction.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Replace the value.
    ///
    /// The replacement is encoded and written to the store, then memory is
    /// updated. Write faults degrade to an in-memory update.
    pub fn set(&mut self, next: T) {
        self.write_through(&next);
        self.value = next;
    }

    /// Replace the value with a function of the current value.
    ///
    /// `f` receives the loaded value, not the construction-time initial,
    /// so updates compose with whatever the store held.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Remove the store entry and reset to the initial value.
    pub fn clear(&mut self) {
        if self.durable {
            if let Err(e) = self.store.remove(self.key.as_str()) {
                tracing::warn!(key = %self.key, error = %e, "failed to clear store entry");
            }
        }
        self.value = self.initial.clone();
    }

    fn write_through(&mut self, next: &T) {
        if !self.durable {
            return;
        }

        let encoded = match serde_json::to_string(next) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to encode value");
                return;
            }
        };

        if let Err(e) = self.store.set(self.key.as_str(), &encoded) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist value");
        }
    }
}
