//! Result-shaped outcome wrapper.
//!
//! [`capture`] runs a fallible async operation and folds whichever branch
//! occurred into a plain [`Outcome`] struct, so call sites can branch on
//! a field instead of handling a propagating error. Nothing re-raises.

use std::future::Future;

/// The outcome of a fallible operation.
///
/// Exactly one of `value` and `error` is `Some`, and `ok` mirrors which.
///
/// # Example
///
/// ```rust
/// use surface_util::Outcome;
///
/// let outcome: Outcome<u32, String> = Outcome::success(7);
/// assert!(outcome.ok);
/// assert_eq!(outcome.value, Some(7));
/// assert_eq!(outcome.error, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, E> {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// The success value; `None` on failure.
    pub value: Option<T>,
    /// The failure value; `None` on success.
    pub error: Option<E>,
}

impl<T, E> Outcome<T, E> {
    /// An outcome for a succeeded operation.
    pub fn success(value: T) -> Self {
        Self {
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    /// An outcome for a failed operation.
    pub fn failure(error: E) -> Self {
        Self {
            ok: false,
            value: None,
            error: Some(error),
        }
    }

    /// Convert back into a `Result`.
    ///
    /// # Panics
    ///
    /// Never panics for outcomes built through this module's
    /// constructors, which maintain the one-of-two invariant.
    pub fn into_result(self) -> Result<T, E> {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, Some(error)) => Err(error),
            (None, None) => unreachable!("outcome holds neither value nor error"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

/// Run an async fallible operation and capture either branch.
pub async fn capture<T, E, F>(operation: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    operation.await.into()
}

/// Synchronous counterpart of [`capture`].
pub fn capture_sync<T, E>(operation: impl FnOnce() -> Result<T, E>) -> Outcome<T, E> {
    operation().into()
}
