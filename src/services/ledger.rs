//! Ledger service
//!
//! Provides the operations that mutate the ledger. Every successful mutation
//! re-saves the full ledger and, when enabled, appends an audit entry.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use tracing::info;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{PoupeError, PoupeResult};
use crate::models::{Ledger, Month, Transaction, TransactionId, TransactionInput};
use crate::storage::{KeyValueStore, LedgerStore};

/// Service owning the loaded ledger and its persistence
pub struct LedgerService<S> {
    store: LedgerStore<S>,
    ledger: Ledger,
    audit: Option<AuditLogger>,
    date_format: String,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Load the ledger from `store`
    pub fn open(store: LedgerStore<S>, settings: &Settings, audit: Option<AuditLogger>) -> Self {
        let ledger = store.load();
        Self {
            store,
            ledger,
            audit: audit.filter(|_| settings.audit_enabled),
            date_format: settings.date_format.clone(),
        }
    }

    /// The current ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Transactions recorded in a month
    pub fn month(&self, month: Month) -> &[Transaction] {
        self.ledger.month(month)
    }

    /// Add a transaction to `month`, stamped with the current local time
    pub fn add_transaction(
        &mut self,
        month: Month,
        input: TransactionInput,
    ) -> PoupeResult<Transaction> {
        self.add_transaction_at(month, input, &Local::now())
    }

    /// Add a transaction to `month` as if created at `now`
    ///
    /// Invalid input is rejected with a validation error and nothing changes.
    /// `PoupeError::Audit` means the transaction was saved but the audit
    /// entry could not be written.
    pub fn add_transaction_at<Tz>(
        &mut self,
        month: Month,
        input: TransactionInput,
        now: &DateTime<Tz>,
    ) -> PoupeResult<Transaction>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let txn = self
            .ledger
            .add_transaction(month, input, now, &self.date_format)?
            .clone();

        self.store.save(&self.ledger)?;
        info!(id = %txn.id, month = month.index(), kind = %txn.kind, "added transaction");

        if let Some(audit) = &self.audit {
            audit
                .log(&AuditEntry::create(month, &txn))
                .map_err(|e| PoupeError::Audit(e.to_string()))?;
        }

        Ok(txn)
    }

    /// Delete a transaction from `month`
    ///
    /// Returns the removed transaction, or `None` when no transaction with
    /// that id exists in the month. Nothing is saved in that case.
    pub fn delete_transaction(
        &mut self,
        month: Month,
        id: TransactionId,
    ) -> PoupeResult<Option<Transaction>> {
        let Some(removed) = self.ledger.delete_transaction(month, id) else {
            return Ok(None);
        };

        self.store.save(&self.ledger)?;
        info!(id = %id, month = month.index(), "deleted transaction");

        if let Some(audit) = &self.audit {
            audit
                .log(&AuditEntry::delete(month, &removed))
                .map_err(|e| PoupeError::Audit(e.to_string()))?;
        }

        Ok(Some(removed))
    }

    /// Delete a transaction by id, searching every month
    pub fn delete_by_id(&mut self, id: TransactionId) -> PoupeResult<(Month, Transaction)> {
        let month = self
            .ledger
            .find(id)
            .map(|(month, _)| month)
            .ok_or_else(|| PoupeError::transaction_not_found(id.to_string()))?;

        self.delete_transaction(month, id)?
            .map(|txn| (month, txn))
            .ok_or_else(|| PoupeError::transaction_not_found(id.to_string()))
    }
}
