//! Durable string key-value stores.
//!
//! This is the lowest layer of surface: a synchronous, string-keyed,
//! string-valued store behind an object-safe trait. Higher layers decide
//! what the strings mean; this layer only moves them.
//!
//! - [`StringStore`]: the store contract (`get`/`set`/`remove`)
//! - [`MemoryStore`]: process-local `HashMap` store
//! - [`FileStore`]: one file per key under a validated root directory
//! - [`SharedStore`]: `Arc<Mutex<_>>` wrapper so several handles can share
//!   one store
//! - [`DeniedStore`]: a store whose environment refuses access, for
//!   exercising graceful degradation

mod denied;
mod error;
mod file;
mod memory;
mod shared;
mod traits;

pub use denied::DeniedStore;
pub use error::KvError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use shared::SharedStore;
pub use traits::StringStore;
