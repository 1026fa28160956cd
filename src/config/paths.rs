//! Path management for Poupe
//!
//! Provides XDG-compliant path resolution for configuration, data, and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `POUPE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/poupe` or `~/.config/poupe`
//! 3. Windows: `%APPDATA%\poupe`

use std::path::{Path, PathBuf};

use crate::error::PoupeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POUPE_DATA_DIR";

/// Manages all paths used by Poupe
#[derive(Debug, Clone)]
pub struct PoupePaths {
    /// Base directory for all Poupe data
    base_dir: PathBuf,
}

impl PoupePaths {
    /// Create a new PoupePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PoupeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PoupePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/poupe/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (~/.config/poupe/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("poupe.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PoupeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PoupeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PoupeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PoupeError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("poupe"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| PoupeError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("poupe"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PoupeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PoupeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("poupe"))
}
