//! Data export
//!
//! Writes ledger data to portable formats.

pub mod csv;

pub use self::csv::export_transactions_csv;
