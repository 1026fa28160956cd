//! Storage layer for Poupe
//!
//! Provides durable key-value storage with atomic file writes, and the
//! ledger store that persists the whole ledger under a single key.

pub mod file_io;
pub mod kv;
pub mod ledger;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use ledger::LedgerStore;

use crate::config::{PoupePaths, Settings};
use crate::error::PoupeError;

/// Open the file-backed ledger store described by `paths` and `settings`
///
/// Creates the data directory if needed.
pub fn open_ledger_store(
    paths: &PoupePaths,
    settings: &Settings,
) -> Result<LedgerStore<FileStore>, PoupeError> {
    paths.ensure_directories()?;
    let store = FileStore::new(paths.data_dir());
    // Reject a bad key from config.json up front rather than on first save
    store.path_for(&settings.storage_key)?;
    Ok(LedgerStore::new(store, settings.storage_key.clone()))
}
