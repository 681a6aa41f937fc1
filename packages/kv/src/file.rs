//! Disk-backed store: one file per key under a root directory.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::{KvError, StringStore};

/// A durable store that keeps each entry in its own file.
///
/// The root directory plays the role of the store's namespace: two
/// `FileStore` values opened on the same root see the same entries, the
/// way two UI sessions share one origin-scoped store. Entries outlive the
/// store value and persist until removed or overwritten.
///
/// Keys are escaped into flat file names, so a key can never name a file
/// outside the root.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at an existing writable directory.
    pub fn new(root: PathBuf) -> Result<FileStore, KvError> {
        let attr = fs::metadata(&root).map_err(|source| KvError::InvalidRoot {
            path: root.clone(),
            source,
        })?;

        if !attr.is_dir() {
            return Err(KvError::InvalidRoot {
                path: root,
                source: io::Error::other("store root must be a directory"),
            });
        }

        if attr.permissions().readonly() {
            return Err(KvError::InvalidRoot {
                path: root,
                source: io::Error::other("store root must be writable"),
            });
        }

        match root.canonicalize() {
            Ok(root) => Ok(FileStore { root }),
            Err(source) => Err(KvError::InvalidRoot { path: root, source }),
        }
    }

    /// The canonicalized root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(escape_key(key))
    }
}

/// Escape a key into a single flat file name.
///
/// Alphanumerics, `-` and `_` pass through; every other byte becomes
/// `%XX`. The escaping is injective, so distinct keys never collide.
fn escape_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => {
                name.push(byte as char);
            }
            _ => {
                // Infallible for String targets.
                let _ = write!(name, "%{:02X}", byte);
            }
        }
    }
    name
}

impl StringStore for FileStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.entry_path(key);
        tracing::debug!(path = %path.display(), "reading entry");

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.entry_path(key);
        tracing::debug!(path = %path.display(), "writing entry");

        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        let path = self.entry_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_read_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap(), Some("hello".to_string()));
    }

    #[test]
    fn read_nonexistent_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.get("nonexistent").unwrap(), None);
    }

    #[test]
    fn entries_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();
            store.set("persisted", "still here").unwrap();
        }

        let mut reopened = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            reopened.get("persisted").unwrap(),
            Some("still here".to_string())
        );
    }

    #[test]
    fn remove_works() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("gone", "soon").unwrap();
        store.remove("gone").unwrap();
        assert_eq!(store.get("gone").unwrap(), None);

        // Removing again is still fine.
        store.remove("gone").unwrap();
    }

    #[test]
    fn hostile_keys_stay_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("../escape", "contained").unwrap();
        store.set("a/b/c", "flat").unwrap();

        assert_eq!(
            store.get("../escape").unwrap(),
            Some("contained".to_string())
        );
        assert_eq!(store.get("a/b/c").unwrap(), Some("flat".to_string()));

        // Every entry landed directly under the root.
        for entry in fs::read_dir(dir.path()).unwrap() {
            assert!(entry.unwrap().file_type().unwrap().is_file());
        }
    }

    #[test]
    fn escape_is_injective_for_lookalike_keys() {
        assert_ne!(escape_key("a/b"), escape_key("a%2Fb"));
        assert_ne!(escape_key("a.b"), escape_key("a_b"));
        assert_eq!(escape_key("plain-key_1"), "plain-key_1");
    }

    #[test]
    fn missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = FileStore::new(missing);
        assert!(matches!(result, Err(KvError::InvalidRoot { .. })));
    }

    #[test]
    fn file_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a_file");
        fs::write(&file_path, "not a dir").unwrap();

        let result = FileStore::new(file_path);
        assert!(matches!(result, Err(KvError::InvalidRoot { .. })));
    }
}
