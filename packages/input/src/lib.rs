//! Event-driven UI collaborators.
//!
//! Three small, independent facilities that UI code subscribes to:
//!
//! - [`HotKeys`]: dispatch primary-modifier keyboard shortcuts to bound
//!   callbacks
//! - [`MediaMonitor`]: evaluate media queries against a viewport and
//!   notify watchers on changes
//! - [`Copier`]: copy text to an injected clipboard sink with copied-state
//!   tracking
//!
//! Every subscription follows the scoped-resource pattern: subscribing
//! returns a guard, and dropping the guard unsubscribes. Nothing here
//! spawns threads; dispatch and notification happen on the caller's
//! thread.

mod clipboard;
mod hotkeys;
mod media;

pub use clipboard::{ClipboardError, ClipboardSink, Copier, CopyOptions, MemoryClipboard};
pub use hotkeys::{HotKeyBinding, HotKeys, KeyEvent, Modifiers};
pub use media::{MediaMonitor, MediaQuery, MediaQueryError, MediaWatch, Viewport};
