//! Clipboard copy with copied-state tracking.

use std::time::{Duration, Instant};

/// Errors from a clipboard sink.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard exists in this environment.
    #[error("clipboard unavailable")]
    Unavailable,

    /// The environment refused the write.
    #[error("clipboard write denied: {message}")]
    Denied { message: String },
}

/// Something that accepts text as the system clipboard contents.
///
/// Injected into [`Copier`] so copy behavior is testable without a real
/// clipboard.
pub trait ClipboardSink: Send {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// An in-process sink that just remembers the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Options for a single copy operation.
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    /// How long the copied state stays set. `None` keeps it until the next
    /// copy or [`Copier::reset`].
    pub timeout: Option<Duration>,

    /// Emit a "copied to clipboard" log event on success, for UIs that
    /// surface notifications from the log stream.
    pub notify: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(3)),
            notify: false,
        }
    }
}

/// Copies text to a sink and tracks what was last copied.
///
/// The copied state answers "should the UI show a checkmark right now":
/// it holds the copied text and expires after the configured timeout.
/// Expiry is computed from the clock on read; no timer thread runs.
///
/// A failed copy returns `false` and clears the copied state. It never
/// panics and never propagates the sink error.
pub struct Copier<S> {
    sink: S,
    copied: Option<CopiedState>,
}

struct CopiedState {
    text: String,
    expires_at: Option<Instant>,
}

impl<S: ClipboardSink> Copier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, copied: None }
    }

    /// Copy with default options (3 second timeout, no notification).
    pub fn copy(&mut self, text: &str) -> bool {
        self.copy_with(text, CopyOptions::default())
    }

    /// Copy with explicit options. Returns whether the copy succeeded.
    pub fn copy_with(&mut self, text: &str, options: CopyOptions) -> bool {
        match self.sink.write_text(text) {
            Ok(()) => {
                self.copied = Some(CopiedState {
                    text: text.to_string(),
                    expires_at: options.timeout.map(|t| Instant::now() + t),
                });
                if options.notify {
                    tracing::info!("copied to clipboard");
                }
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard copy failed");
                self.copied = None;
                false
            }
        }
    }

    /// The text of the last successful copy, until it expires.
    pub fn copied_text(&self) -> Option<&str> {
        let state = self.copied.as_ref()?;
        match state.expires_at {
            Some(deadline) if Instant::now() >= deadline => None,
            _ => Some(&state.text),
        }
    }

    /// Whether a copy is current (copied and not yet expired).
    pub fn is_copied(&self) -> bool {
        self.copied_text().is_some()
    }

    /// Clear the copied state without touching the sink.
    pub fn reset(&mut self) {
        self.copied = None;
    }

    /// Access the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A sink whose environment refuses writes.
    struct DeniedClipboard;

    impl ClipboardSink for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Denied {
                message: "permission not granted".to_string(),
            })
        }
    }

    #[test]
    fn successful_copy_reaches_sink_and_sets_state() {
        let mut copier = Copier::new(MemoryClipboard::new());

        assert!(copier.copy("hello"));
        assert_eq!(copier.sink().contents(), Some("hello"));
        assert_eq!(copier.copied_text(), Some("hello"));
        assert!(copier.is_copied());
    }

    #[test]
    fn failed_copy_returns_false_and_clears_state() {
        let mut copier = Copier::new(DeniedClipboard);

        assert!(!copier.copy("hello"));
        assert!(!copier.is_copied());
    }

    #[test]
    fn failure_after_success_clears_previous_state() {
        struct FlakyClipboard {
            fail: bool,
        }

        impl ClipboardSink for FlakyClipboard {
            fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
                if self.fail {
                    Err(ClipboardError::Unavailable)
                } else {
                    Ok(())
                }
            }
        }

        let mut copier = Copier::new(FlakyClipboard { fail: false });
        assert!(copier.copy("first"));

        copier.sink_mut().fail = true;
        assert!(!copier.copy("second"));
        assert!(!copier.is_copied());
    }

    #[test]
    fn copied_state_expires_after_timeout() {
        let mut copier = Copier::new(MemoryClipboard::new());

        let options = CopyOptions {
            timeout: Some(Duration::from_millis(10)),
            notify: false,
        };
        assert!(copier.copy_with("brief", options));
        assert!(copier.is_copied());

        std::thread::sleep(Duration::from_millis(20));
        assert!(!copier.is_copied());
        assert_eq!(copier.copied_text(), None);
    }

    #[test]
    fn no_timeout_keeps_state_until_reset() {
        let mut copier = Copier::new(MemoryClipboard::new());

        let options = CopyOptions {
            timeout: None,
            notify: false,
        };
        assert!(copier.copy_with("sticky", options));
        assert!(copier.is_copied());

        copier.reset();
        assert!(!copier.is_copied());
        // The sink still holds the text; reset only clears UI state.
        assert_eq!(copier.sink().contents(), Some("sticky"));
    }
}
