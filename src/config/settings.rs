//! User settings for Poupe
//!
//! Manages user preferences: currency formatting, the date format stamped on
//! new transactions, the storage key holding the ledger, and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::PoupePaths;
use crate::error::PoupeError;

/// Key under which the ledger is stored by default
pub const DEFAULT_STORAGE_KEY: &str = "financialData";

/// User settings for Poupe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Decimal separator used when displaying amounts
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Date format (strftime) stamped on new transactions
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Storage key holding the serialized ledger
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
            storage_key: default_storage_key(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PoupePaths) -> Result<Self, PoupeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PoupeError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PoupeError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PoupePaths) -> Result<(), PoupeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PoupeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PoupeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
