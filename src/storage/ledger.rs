//! Ledger persistence
//!
//! Loads and saves the whole ledger as one JSON document under a single
//! storage key.

use tracing::{debug, warn};

use crate::error::{PoupeError, PoupeResult};
use crate::models::Ledger;

use super::kv::KeyValueStore;

/// Persists the ledger in a key-value store
#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the ledger
    ///
    /// Absent, unreadable or malformed data yields a fresh ledger with all
    /// twelve months empty. Stored data missing some months is filled in, and
    /// transactions with a non-positive or oversized value are dropped.
    pub fn load(&self) -> Ledger {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored ledger, starting empty");
                return Ledger::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored ledger, starting empty");
                return Ledger::new();
            }
        };

        match serde_json::from_str::<Ledger>(&raw) {
            Ok(mut ledger) => {
                ledger.normalize();
                let discarded = ledger.discard_invalid();
                if discarded > 0 {
                    warn!(key = %self.key, discarded, "dropped stored transactions with out-of-range values");
                }
                debug!(
                    key = %self.key,
                    transactions = ledger.transaction_count(),
                    "loaded ledger"
                );
                ledger
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored ledger is malformed, starting empty");
                Ledger::new()
            }
        }
    }

    /// Serialize and persist the full ledger
    pub fn save(&mut self, ledger: &Ledger) -> PoupeResult<()> {
        let json = serde_json::to_string(ledger)
            .map_err(|e| PoupeError::Storage(format!("Failed to serialize ledger: {}", e)))?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "saved ledger");
        Ok(())
    }
}
