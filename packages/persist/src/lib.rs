//! Store-backed persisted values.
//!
//! A [`Persisted<T>`] keeps an in-memory value of any serde-serializable
//! type in sync with one entry of a [`StringStore`]. Reads survive process
//! restarts; writes land in the store and in memory in the same call.
//!
//! The store is injected at construction, so the same handle works over an
//! in-memory fake in tests and a disk store in production.
//!
//! # Example
//!
//! ```rust
//! use surface_kv::MemoryStore;
//! use surface_persist::{key, Persisted};
//!
//! let mut store = MemoryStore::new();
//!
//! {
//!     let mut count = Persisted::new(&mut store, key!("count"), 0u32);
//!     count.set(41);
//!     count.update(|n| n + 1);
//! }
//!
//! // A fresh handle over the same store and key sees the last write.
//! let count = Persisted::new(&mut store, key!("count"), 0u32);
//! assert_eq!(*count.get(), 42);
//! ```

mod key;
mod persisted;

pub use key::{Key, KeyError};
pub use persisted::Persisted;

// Re-export store types for convenience
pub use surface_kv::{DeniedStore, FileStore, KvError, MemoryStore, SharedStore, StringStore};
