//! Core data models for Poupe
//!
//! This module contains the data structures that represent the tracker's
//! domain: transactions, amounts, month buckets and the ledger itself.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use transaction::{Transaction, TransactionInput, TransactionKind, MAX_VALUE};
