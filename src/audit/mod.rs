//! Audit logging system for Poupe
//!
//! Records every transaction added or deleted, with the transaction itself,
//! in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, month and the
//!   affected transaction.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
