//! Service layer for Poupe
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence after every mutation, and auditing.

pub mod ledger;

pub use ledger::LedgerService;
