//! A store the environment refuses to provide.

use crate::{KvError, StringStore};

/// A store whose every operation is denied.
///
/// Models a hosting environment that refuses storage access (private
/// browsing, sandbox policy, revoked permission). Useful for verifying
/// that consumers degrade gracefully instead of failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedStore;

impl DeniedStore {
    pub fn new() -> Self {
        Self
    }

    fn denied() -> KvError {
        KvError::Denied {
            message: "storage disabled by environment".to_string(),
        }
    }
}

impl StringStore for DeniedStore {
    fn get(&mut self, _key: &str) -> Result<Option<String>, KvError> {
        Err(Self::denied())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), KvError> {
        Err(Self::denied())
    }

    fn remove(&mut self, _key: &str) -> Result<(), KvError> {
        Err(Self::denied())
    }
}
