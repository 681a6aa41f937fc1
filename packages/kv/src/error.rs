//! Error types for the store layer.
//!
//! Errors here are environment-focused: I/O failures and access refusal.
//! An absent key is `Ok(None)`, never an error.

use std::path::PathBuf;

/// Errors raised by [`StringStore`](crate::StringStore) implementations.
#[derive(thiserror::Error, Debug)]
pub enum KvError {
    /// Generic I/O failure while reading or writing an entry.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The root directory given to a disk store is unusable.
    #[error("invalid store root {path}: {source}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The hosting environment refuses access to the store.
    #[error("store access denied: {message}")]
    Denied { message: String },

    /// A shared store's lock was poisoned by a panicking holder.
    #[error("store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: KvError = io_err.into();
        assert!(matches!(err, KvError::Io(_)));
    }

    #[test]
    fn denied_display() {
        let err = KvError::Denied {
            message: "quota exceeded".to_string(),
        };
        assert!(format!("{}", err).contains("quota exceeded"));
    }

    #[test]
    fn invalid_root_display_names_path() {
        let err = KvError::InvalidRoot {
            path: PathBuf::from("/no/such/dir"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(format!("{}", err).contains("/no/such/dir"));
    }
}
