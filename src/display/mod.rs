//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, transactions and report
//! fragments for the command line.

pub mod report;
pub mod transaction;

pub use report::MoneyFormat;
pub use transaction::{format_transaction_details, format_transaction_table};
