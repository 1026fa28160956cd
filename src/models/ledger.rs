//! The monthly ledger
//!
//! Maps each month index to the transactions recorded in it, in insertion
//! order. Once initialized every one of the twelve months has a bucket, even
//! when it is empty. Serialized as a JSON object keyed by month index
//! (`{"0": [...], "1": [...], ...}`).

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use super::ids::TransactionId;
use super::month::Month;
use super::transaction::{Transaction, TransactionInput};
use crate::error::PoupeResult;

/// All recorded transactions, bucketed by month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<Month, Vec<Transaction>>,
}

impl Ledger {
    /// Create a ledger with an empty bucket for every month
    pub fn new() -> Self {
        Self {
            months: Month::all().map(|m| (m, Vec::new())).collect(),
        }
    }

    /// Fill in any missing month buckets
    ///
    /// Stored data may omit months; after normalizing, all twelve are present.
    pub fn normalize(&mut self) {
        for month in Month::all() {
            self.months.entry(month).or_default();
        }
    }

    /// Drop transactions whose value is zero, negative or above the cap
    ///
    /// Returns how many were removed.
    pub fn discard_invalid(&mut self) -> usize {
        let before = self.transaction_count();
        for bucket in self.months.values_mut() {
            bucket.retain(Transaction::has_valid_value);
        }
        before - self.transaction_count()
    }

    /// Whether every month has a bucket
    pub fn is_initialized(&self) -> bool {
        Month::all().all(|m| self.months.contains_key(&m))
    }

    /// Transactions recorded in a month, in insertion order
    pub fn month(&self, month: Month) -> &[Transaction] {
        self.months.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every month bucket in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (Month, &[Transaction])> {
        self.months.iter().map(|(m, txns)| (*m, txns.as_slice()))
    }

    /// Total number of transactions across all months
    pub fn transaction_count(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count() == 0
    }

    /// Largest id in the ledger, used to keep new ids monotonic
    pub fn last_id(&self) -> Option<TransactionId> {
        self.months.values().flatten().map(|t| t.id).max()
    }

    /// Find a transaction by id within a month
    pub fn get(&self, month: Month, id: TransactionId) -> Option<&Transaction> {
        self.month(month).iter().find(|t| t.id == id)
    }

    /// Find a transaction by id in any month
    pub fn find(&self, id: TransactionId) -> Option<(Month, &Transaction)> {
        self.iter()
            .find_map(|(m, txns)| txns.iter().find(|t| t.id == id).map(|t| (m, t)))
    }

    /// Validate `input` and append it to `month` as a transaction created at `now`
    ///
    /// On a validation error the ledger is left untouched.
    pub fn add_transaction<Tz>(
        &mut self,
        month: Month,
        input: TransactionInput,
        now: &DateTime<Tz>,
        date_format: &str,
    ) -> PoupeResult<&Transaction>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let id = TransactionId::generate(now, self.last_id());
        let txn = input.into_transaction(id, now, date_format)?;

        let bucket = self.months.entry(month).or_default();
        let index = bucket.len();
        bucket.push(txn);
        Ok(&bucket[index])
    }

    /// Remove the transaction with `id` from `month`
    ///
    /// Returns the removed transaction, or `None` (leaving the month
    /// unchanged) when no such transaction exists.
    pub fn delete_transaction(&mut self, month: Month, id: TransactionId) -> Option<Transaction> {
        let bucket = self.months.get_mut(&month)?;
        let position = bucket.iter().position(|t| t.id == id)?;
        Some(bucket.remove(position))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
