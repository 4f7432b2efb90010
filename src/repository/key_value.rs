use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::services::error_handling::WarungError;

/// The persistence gateway: an opaque key-value collaborator holding whole
/// serialized blobs under fixed keys. Mirrors the browser storage the data
/// originally lived in; no partial writes, no indexing.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, WarungError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), WarungError>;
    fn remove(&mut self, key: &str) -> Result<(), WarungError>;
}

/// Durable store keeping one file per key under a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store, creating the directory if it does not exist yet.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, WarungError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| WarungError::Storage {
            operation: format!("create data directory {}", dir.display()),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, WarungError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(WarungError::Storage {
                operation: format!("read key '{key}'"),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WarungError> {
        fs::write(self.path_for(key), value).map_err(|source| WarungError::Storage {
            operation: format!("write key '{key}'"),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), WarungError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(WarungError::Storage {
                operation: format!("remove key '{key}'"),
                source,
            }),
        }
    }
}

/// Ephemeral store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for corrupt-blob and resumed-session tests.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WarungError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WarungError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), WarungError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove_absent_is_ok() {
        let mut store = MemoryStore::new();
        store.remove("never-set").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("warung-items").unwrap(), None);
        store.set("warung-items", "[]").unwrap();
        assert_eq!(store.get("warung-items").unwrap().as_deref(), Some("[]"));

        store.remove("warung-items").unwrap();
        assert_eq!(store.get("warung-items").unwrap(), None);
        // Removing again stays quiet.
        store.remove("warung-items").unwrap();
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("warung");
        let mut store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join("k").exists());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("isLoggedIn", "true").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("true"));
    }
}
