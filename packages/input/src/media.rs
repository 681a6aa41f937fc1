//! Media query parsing and change observation.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Errors from parsing a media query string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaQueryError {
    /// The query string is empty.
    #[error("empty media query")]
    Empty,

    /// A condition is not of the form `(feature: value)`.
    #[error("malformed media condition: {condition}")]
    Malformed { condition: String },

    /// The feature name is not one this monitor evaluates.
    #[error("unsupported media feature: {feature}")]
    UnsupportedFeature { feature: String },

    /// The value is not a pixel length like `768px`.
    #[error("invalid length: {value}")]
    InvalidLength { value: String },
}

/// Viewport dimensions a query is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    MinWidth(u32),
    MaxWidth(u32),
    MinHeight(u32),
    MaxHeight(u32),
}

impl Condition {
    fn matches(&self, viewport: Viewport) -> bool {
        match *self {
            Condition::MinWidth(px) => viewport.width >= px,
            Condition::MaxWidth(px) => viewport.width <= px,
            Condition::MinHeight(px) => viewport.height >= px,
            Condition::MaxHeight(px) => viewport.height <= px,
        }
    }
}

/// A parsed media query over viewport dimensions.
///
/// Supports the dimensional subset of the CSS syntax: `(min-width: Npx)`,
/// `(max-width: Npx)`, `(min-height: Npx)`, `(max-height: Npx)`, and
/// conjunctions joined with `and`. A query with several conditions matches
/// when all of them do.
///
/// # Example
///
/// ```rust
/// use surface_input::{MediaQuery, Viewport};
///
/// let query = MediaQuery::parse("(min-width: 768px) and (max-width: 1024px)").unwrap();
/// assert!(query.matches(Viewport::new(800, 600)));
/// assert!(!query.matches(Viewport::new(1280, 720)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    conditions: Vec<Condition>,
    raw: String,
}

impl MediaQuery {
    /// Parse a media query string.
    pub fn parse(query: &str) -> Result<Self, MediaQueryError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(MediaQueryError::Empty);
        }

        let conditions = trimmed
            .split(" and ")
            .map(parse_condition)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MediaQuery {
            conditions,
            raw: trimmed.to_string(),
        })
    }

    /// Whether the query matches the given viewport.
    pub fn matches(&self, viewport: Viewport) -> bool {
        self.conditions.iter().all(|c| c.matches(viewport))
    }

    /// The original query string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_condition(condition: &str) -> Result<Condition, MediaQueryError> {
    let malformed = || MediaQueryError::Malformed {
        condition: condition.to_string(),
    };

    let inner = condition
        .trim()
        .strip_prefix('(')
        .and_then(|c| c.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let (feature, value) = inner.split_once(':').ok_or_else(malformed)?;
    let feature = feature.trim();
    let value = value.trim();

    let px = value
        .strip_suffix("px")
        .and_then(|v| v.trim().parse::<u32>().ok())
        .ok_or_else(|| MediaQueryError::InvalidLength {
            value: value.to_string(),
        })?;

    match feature {
        "min-width" => Ok(Condition::MinWidth(px)),
        "max-width" => Ok(Condition::MaxWidth(px)),
        "min-height" => Ok(Condition::MinHeight(px)),
        "max-height" => Ok(Condition::MaxHeight(px)),
        _ => Err(MediaQueryError::UnsupportedFeature {
            feature: feature.to_string(),
        }),
    }
}

type ChangeCallback = Box<dyn FnMut(bool) + Send>;

struct WatchEntry {
    id: u64,
    query: MediaQuery,
    matched: Arc<AtomicBool>,
    on_change: ChangeCallback,
}

struct MonitorState {
    viewport: Viewport,
    next_id: u64,
    watches: Vec<WatchEntry>,
}

/// Evaluates media queries against a viewport and notifies watchers.
///
/// [`watch`](MediaMonitor::watch) evaluates the query against the current
/// viewport immediately, then re-evaluates on every
/// [`set_viewport`](MediaMonitor::set_viewport); the change callback runs
/// only when a watch's boolean actually flips. Dropping the returned
/// [`MediaWatch`] unsubscribes.
///
/// Change callbacks run on the thread calling `set_viewport` and must not
/// call back into the same monitor.
pub struct MediaMonitor {
    state: Arc<Mutex<MonitorState>>,
}

impl MediaMonitor {
    /// Create a monitor with an initial viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Arc::new(Mutex::new(MonitorState {
                viewport,
                next_id: 0,
                watches: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current viewport.
    pub fn viewport(&self) -> Viewport {
        self.lock().viewport
    }

    /// Subscribe to a query.
    ///
    /// Fails only on an unparsable query string; runtime evaluation never
    /// fails.
    pub fn watch(
        &self,
        query: &str,
        on_change: impl FnMut(bool) + Send + 'static,
    ) -> Result<MediaWatch, MediaQueryError> {
        let query = MediaQuery::parse(query)?;
        let mut state = self.lock();

        let matched = Arc::new(AtomicBool::new(query.matches(state.viewport)));
        let id = state.next_id;
        state.next_id += 1;
        state.watches.push(WatchEntry {
            id,
            query,
            matched: Arc::clone(&matched),
            on_change: Box::new(on_change),
        });

        Ok(MediaWatch {
            id,
            matched,
            state: Arc::downgrade(&self.state),
        })
    }

    /// Update the viewport, notifying watches whose match state flipped.
    pub fn set_viewport(&self, viewport: Viewport) {
        let mut state = self.lock();
        state.viewport = viewport;

        for entry in &mut state.watches {
            let now = entry.query.matches(viewport);
            let before = entry.matched.swap(now, Ordering::SeqCst);
            if now != before {
                (entry.on_change)(now);
            }
        }
    }

    /// Number of live watches.
    pub fn watch_count(&self) -> usize {
        self.lock().watches.len()
    }
}

/// Guard for one media-query subscription.
///
/// Exposes the current match state; dropping it unsubscribes.
pub struct MediaWatch {
    id: u64,
    matched: Arc<AtomicBool>,
    state: Weak<Mutex<MonitorState>>,
}

impl MediaWatch {
    /// The query's current match state.
    pub fn matches(&self) -> bool {
        self.matched.load(Ordering::SeqCst)
    }
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.watches.retain(|entry| entry.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn parse_single_condition() {
        let query = MediaQuery::parse("(min-width: 768px)").unwrap();
        assert!(query.matches(Viewport::new(768, 0)));
        assert!(!query.matches(Viewport::new(767, 0)));
    }

    #[test]
    fn parse_conjunction() {
        let query =
            MediaQuery::parse("(min-width: 600px) and (max-height: 900px)").unwrap();
        assert!(query.matches(Viewport::new(600, 900)));
        assert!(!query.matches(Viewport::new(599, 900)));
        assert!(!query.matches(Viewport::new(600, 901)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(MediaQuery::parse(""), Err(MediaQueryError::Empty));
        assert!(matches!(
            MediaQuery::parse("min-width: 768px"),
            Err(MediaQueryError::Malformed { .. })
        ));
        assert!(matches!(
            MediaQuery::parse("(prefers-color-scheme: dark)"),
            Err(MediaQueryError::UnsupportedFeature { .. })
        ));
        assert!(matches!(
            MediaQuery::parse("(min-width: wide)"),
            Err(MediaQueryError::InvalidLength { .. })
        ));
    }

    #[test]
    fn watch_evaluates_eagerly() {
        let monitor = MediaMonitor::new(Viewport::new(1280, 720));

        let wide = monitor.watch("(min-width: 1024px)", |_| {}).unwrap();
        let narrow = monitor.watch("(max-width: 480px)", |_| {}).unwrap();

        assert!(wide.matches());
        assert!(!narrow.matches());
    }

    #[test]
    fn change_callback_fires_only_on_flips() {
        let monitor = MediaMonitor::new(Viewport::new(1280, 720));
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let watch = monitor
            .watch("(max-width: 480px)", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        // Still wide: no flip, no call.
        monitor.set_viewport(Viewport::new(1024, 720));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // Narrow now: one call, state flips.
        monitor.set_viewport(Viewport::new(400, 720));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(watch.matches());

        // Narrow still: no extra call.
        monitor.set_viewport(Viewport::new(420, 720));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_watch_unsubscribes() {
        let monitor = MediaMonitor::new(Viewport::new(1280, 720));
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let watch = monitor
            .watch("(max-width: 480px)", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        assert_eq!(monitor.watch_count(), 1);

        drop(watch);
        assert_eq!(monitor.watch_count(), 0);

        monitor.set_viewport(Viewport::new(400, 720));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn watch_outliving_monitor_drops_cleanly() {
        let monitor = MediaMonitor::new(Viewport::new(800, 600));
        let watch = monitor.watch("(min-width: 100px)", |_| {}).unwrap();

        drop(monitor);
        assert!(watch.matches());
        drop(watch);
    }
}
