//! Transaction identifiers
//!
//! A transaction is identified by its creation time in milliseconds since the
//! Unix epoch. Ids within a ledger are kept strictly increasing, so two
//! transactions created within the same millisecond still get distinct ids.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique, monotonic transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Create an ID from a raw millisecond timestamp
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw value
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Generate the id for a transaction created at `now`
    ///
    /// Uses the timestamp unless it does not advance past `last`, the largest
    /// id already handed out, in which case `last + 1` is used.
    pub fn generate<Tz: TimeZone>(now: &DateTime<Tz>, last: Option<TransactionId>) -> Self {
        let millis = now.timestamp_millis();
        match last {
            Some(last) if millis <= last.0 => Self(last.0 + 1),
            _ => Self(millis),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
