//! Durable key-value storage.
//!
//! The application persists exactly two string entries: the logged-in
//! profile (as JSON) and the theme preference. [`FileStorage`] keeps them in
//! a single JSON object on disk; [`MemoryStorage`] is used by tests and by
//! callers that want a throwaway session.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Storage keys.
pub mod keys {
    /// Serialized `UserProfile` of the logged-in user.
    pub const CURRENT_USER: &str = "market_catalog_user";

    /// Theme preference, `"light"` or `"dark"`.
    pub const THEME: &str = "theme";
}

/// Errors writing to durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed durable storage.
///
/// Reads never fail: a value that cannot be read is reported as absent.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be made durable. The
    /// in-memory view is updated regardless.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal could not be made durable.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage with no durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object file.
///
/// The whole file is rewritten on every change. A missing or unreadable file
/// opens as empty storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`, loading any existing entries.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        debug!(path = %path.display(), entries = entries.len(), "Opened storage file");
        Self { path, entries }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Storage file unreadable, starting empty");
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&body).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Storage file malformed, starting empty");
        BTreeMap::new()
    })
}
