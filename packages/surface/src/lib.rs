//! surface: store-backed state and small helpers for UI code.
//!
//! The centerpiece is [`Persisted`]: an in-memory value synchronized with
//! one entry of an injected [`StringStore`], so state survives restarts.
//! Around it sit independent collaborators - keyboard shortcuts, media
//! query watching, clipboard copy - and pure formatting and guard
//! utilities. Each piece stands alone; use what you need.
//!
//! # Example
//!
//! ```rust
//! use surface::{key, MemoryStore, Persisted};
//!
//! let mut store = MemoryStore::new();
//! let mut sidebar = Persisted::new(&mut store, key!("sidebar.open"), true);
//! sidebar.update(|open| !*open);
//! assert!(!*sidebar.get());
//! ```

pub use surface_kv::{DeniedStore, FileStore, KvError, MemoryStore, SharedStore, StringStore};

pub use surface_persist::{key, Key, KeyError, Persisted};

pub use surface_input::{
    ClipboardError, ClipboardSink, Copier, CopyOptions, HotKeyBinding, HotKeys, KeyEvent,
    MediaMonitor, MediaQuery, MediaQueryError, MediaWatch, MemoryClipboard, Modifiers, Viewport,
};

pub use surface_util::{
    as_bool_array, as_date_array, as_number_array, as_string_array, capture, capture_sync,
    format_compact_number, format_date, format_date_time, format_latency, format_milliseconds,
    format_relative_time, format_relative_time_at, is_array_of_booleans, is_array_of_dates,
    is_array_of_numbers, is_array_of_strings, DateInput, Outcome, INVALID_DATE,
};
