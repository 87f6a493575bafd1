//! Key-value persistence for the cart and wishlist.
//!
//! Storage is a cache of convenience, not a source of truth. Reads never
//! fail from the caller's point of view: a missing, unreadable or malformed
//! entry loads as an empty collection. Writes are best-effort and
//! non-transactional.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for persisted collections.
pub mod keys {
    /// Key for the serialized cart line items.
    pub const CART: &str = "cart";

    /// Key for the serialized wishlist entries.
    pub const WISHLIST: &str = "wishlist";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Collection could not be serialized.
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued store.
pub trait Storage: Send + Sync + fmt::Debug {
    /// Read the value for `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Storage backed by one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a storage directory. It is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if `dir` exists but is not a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(StorageError::Io {
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                path: dir,
            });
        }
        Ok(Self { dir })
    }

    /// The directory holding the entry files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Load a JSON array stored under `key`.
///
/// Absence, a read failure or any shape mismatch yields an empty vector.
/// Failures are logged and swallowed.
pub fn load_collection<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed persisted collection");
            Vec::new()
        }
    }
}

/// Serialize `items` as a JSON array and store it under `key`.
///
/// # Errors
///
/// Returns `StorageError` if serialization or the backend write fails.
pub fn save_collection<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    storage.set(key, &raw)
}

/// Best-effort variant of [`save_collection`] used after every store mutation.
pub(crate) fn persist<T: Serialize>(storage: &dyn Storage, key: &str, items: &[T]) {
    if let Err(e) = save_collection(storage, key, items) {
        tracing::warn!(key, error = %e, "Failed to persist collection");
    }
}

/// Best-effort removal of a persisted collection.
pub(crate) fn forget(storage: &dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(key, error = %e, "Failed to remove persisted collection");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nested")).unwrap();

        assert_eq!(storage.get(keys::CART).unwrap(), None);
        storage.remove(keys::WISHLIST).unwrap();
        assert!(!storage.dir().exists());

        storage.set(keys::CART, "[1,2]").unwrap();
        assert!(storage.dir().join("cart.json").exists());
        assert_eq!(storage.get(keys::CART).unwrap().as_deref(), Some("[1,2]"));

        storage.remove(keys::CART).unwrap();
        storage.remove(keys::CART).unwrap();
        assert_eq!(storage.get(keys::CART).unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_file_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            FileStorage::open(file.path()),
            Err(StorageError::Io { .. })
        ));
    }

    #[test]
    fn test_load_collection_absent_is_empty() {
        let storage = MemoryStorage::new();
        let items: Vec<u32> = load_collection(&storage, "missing");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_collection_malformed_is_empty() {
        let storage = MemoryStorage::new();
        storage.set("nums", "{not json").unwrap();
        assert!(load_collection::<u32>(&storage, "nums").is_empty());

        storage.set("nums", r#"{"an":"object"}"#).unwrap();
        assert!(load_collection::<u32>(&storage, "nums").is_empty());

        storage.set("nums", r#"[1, "two", 3]"#).unwrap();
        assert!(load_collection::<u32>(&storage, "nums").is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        save_collection(&storage, "nums", &[3_u32, 1, 2]).unwrap();
        assert_eq!(load_collection::<u32>(&storage, "nums"), vec![3, 1, 2]);
    }
}
