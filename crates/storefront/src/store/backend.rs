//! Key-value backends for the persistent store.
//!
//! The store reads and writes whole-collection JSON strings under short
//! namespaced keys. [`FileBackend`] keeps one file per key under a data
//! directory; [`MemoryBackend`] is the in-memory fake used by tests and
//! ephemeral callers.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Errors from a key-value backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Filesystem operation failed.
    #[error("I/O error for key {key}: {source}")]
    Io {
        /// Store key being accessed.
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// A synchronous string key-value backend.
///
/// Single-writer-single-reader within one process; there is no locking
/// beyond what each backend needs for its own interior mutability.
pub trait KvBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails for a reason other
    /// than the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Delete `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying delete fails.
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

/// File-backed key-value storage: one `<key>.json` file per key.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a file backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| BackendError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(BackendError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        fs::write(self.path_for(key), value).map_err(|source| BackendError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(BackendError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

/// In-memory key-value storage.
///
/// Substitutable for [`FileBackend`] anywhere a [`KvBackend`] is expected;
/// the integration tests run entirely against this backend.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
