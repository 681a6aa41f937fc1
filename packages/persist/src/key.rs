//! Validated store keys.

use std::fmt;

/// Errors related to key validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key string is empty.
    #[error("key must not be empty")]
    Empty,

    /// The key contains a control character.
    #[error("key contains control character at byte {position}")]
    ControlCharacter { position: usize },
}

/// A validated, non-empty store key.
///
/// Keys identify one entry within a store's namespace. Any non-empty
/// string without control characters is a valid key; the store layer
/// handles escaping where the backing medium needs it.
///
/// # Example
///
/// ```rust
/// use surface_persist::Key;
///
/// let key = Key::parse("sidebar.collapsed").unwrap();
/// assert_eq!(key.as_str(), "sidebar.collapsed");
///
/// assert!(Key::parse("").is_err());
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Parse and validate a key string.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }

        if let Some(position) = s.bytes().position(|b| b.is_ascii_control()) {
            return Err(KeyError::ControlCharacter { position });
        }

        Ok(Key(s.to_string()))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Key::parse(s)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Construct a [`Key`] from a literal, panicking on invalid input.
///
/// Intended for keys known at compile time; use [`Key::parse`] for
/// runtime input.
#[macro_export]
macro_rules! key {
    ($s:expr) => {
        $crate::Key::parse($s).expect("invalid key literal")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys_parse() {
        for raw in ["a", "sidebar.collapsed", "user:42/theme", "  spaced  "] {
            let key = Key::parse(raw).unwrap();
            assert_eq!(key.as_str(), raw);
        }
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(Key::parse(""), Err(KeyError::Empty));
    }

    #[test]
    fn control_characters_are_rejected() {
        let err = Key::parse("bad\nkey").unwrap_err();
        assert_eq!(err, KeyError::ControlCharacter { position: 3 });
    }

    #[test]
    fn display_matches_input() {
        let key = key!("theme");
        assert_eq!(format!("{}", key), "theme");
    }

    #[test]
    fn try_from_works() {
        let key: Key = "ok".try_into().unwrap();
        assert_eq!(key.as_str(), "ok");

        let result: Result<Key, _> = "".try_into();
        assert!(result.is_err());
    }
}
