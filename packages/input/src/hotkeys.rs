//! Keyboard shortcut dispatch.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Modifier flags attached to a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        control: false,
        command: false,
        shift: false,
        alt: false,
    };

    /// The platform primary modifier: control on most systems, command on
    /// macOS. Shortcuts fire on either.
    pub fn primary() -> Modifiers {
        Modifiers {
            control: true,
            ..Modifiers::NONE
        }
    }

    /// Whether control or command is held.
    pub fn has_primary(&self) -> bool {
        self.control || self.command
    }
}

/// A key press with its modifier flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

type Callback = Box<dyn FnMut() + Send>;

struct BindingEntry {
    id: u64,
    key: String,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<BindingEntry>,
}

/// Dispatches primary-modifier keyboard shortcuts to bound callbacks.
///
/// A binding fires when a dispatched event carries the binding's key and a
/// primary modifier (control or command). Dropping the returned
/// [`HotKeyBinding`] deregisters the callback, so a component that owns
/// the binding cleans up its listener on teardown automatically.
///
/// Callbacks run on the dispatching thread and must not call back into
/// the same `HotKeys` instance.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use surface_input::{HotKeys, KeyEvent, Modifiers};
///
/// let hotkeys = HotKeys::new();
/// let saves = Arc::new(AtomicUsize::new(0));
///
/// let counter = Arc::clone(&saves);
/// let binding = hotkeys.bind("s", move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// hotkeys.dispatch(&KeyEvent::new("s", Modifiers::primary()));
/// assert_eq!(saves.load(Ordering::SeqCst), 1);
///
/// drop(binding);
/// hotkeys.dispatch(&KeyEvent::new("s", Modifiers::primary()));
/// assert_eq!(saves.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct HotKeys {
    registry: Arc<Mutex<Registry>>,
}

impl HotKeys {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind a callback to `key` + primary modifier.
    ///
    /// The binding stays live until the returned guard is dropped.
    pub fn bind(&self, key: &str, callback: impl FnMut() + Send + 'static) -> HotKeyBinding {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(BindingEntry {
            id,
            key: key.to_string(),
            callback: Box::new(callback),
        });

        HotKeyBinding {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to all matching bindings.
    ///
    /// Returns the number of callbacks fired. Events without a primary
    /// modifier never match.
    pub fn dispatch(&self, event: &KeyEvent) -> usize {
        if !event.modifiers.has_primary() {
            return 0;
        }

        let mut registry = self.lock();
        let mut fired = 0;
        for entry in &mut registry.entries {
            if entry.key == event.key {
                (entry.callback)();
                fired += 1;
            }
        }
        fired
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.lock().entries.len()
    }
}

/// Guard for one hotkey binding; dropping it unbinds the callback.
pub struct HotKeyBinding {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for HotKeyBinding {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.entries.retain(|entry| entry.id != self.id);
        }
    }
}
