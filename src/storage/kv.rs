//! Durable key-value storage
//!
//! The ledger lives under a single key. `FileStore` keeps each key in its own
//! JSON file inside the data directory; `MemoryStore` keeps everything in a
//! map and is used where nothing should touch the disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PoupeError, PoupeResult};

use super::file_io::{read_optional, write_atomic};

/// A string-valued key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> PoupeResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> PoupeResult<()>;

    /// Remove `key`, returning whether it existed
    fn remove(&mut self, key: &str) -> PoupeResult<bool>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PoupeResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PoupeError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PoupeResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> PoupeResult<()> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> PoupeResult<bool> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PoupeError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PoupeResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PoupeResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PoupeResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
