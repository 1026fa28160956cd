//! Calendar month buckets
//!
//! The ledger has no year dimension: every transaction lands in one of twelve
//! month buckets indexed 0 (January) through 11 (December).

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A 0-based calendar month index (0 = January, 11 = December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Number of month buckets in a ledger
    pub const COUNT: usize = 12;

    /// Create a month from a 0-based index
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT as u8).then_some(Self(index))
    }

    /// Create a month from a 1-based number as typed on the command line
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    /// The current calendar month in local time
    pub fn current() -> Self {
        Self(Local::now().month0() as u8)
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// 0-based index
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// 1-based month number
    pub const fn number(&self) -> u8 {
        self.0 + 1
    }

    /// Full month name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// Short chart label: the first three characters of the name
    pub fn label(&self) -> String {
        self.name().chars().take(3).collect()
    }

    /// Following month, wrapping December to January
    pub fn next(&self) -> Self {
        Self((self.0 + 1) % Self::COUNT as u8)
    }

    /// Preceding month, wrapping January to December
    pub fn prev(&self) -> Self {
        Self((self.0 + Self::COUNT as u8 - 1) % Self::COUNT as u8)
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Month::new(index).ok_or_else(|| format!("month index out of range: {}", index))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
