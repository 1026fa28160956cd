//! Poupe - Terminal-based monthly income and expense tracker
//!
//! This library provides the core functionality for the Poupe tracker. Each
//! transaction is recorded against one of twelve calendar months; totals,
//! savings rate, yearly trends and category breakdowns are derived from the
//! ledger on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, amounts, months, the ledger)
//! - `storage`: Key-value storage and the ledger store
//! - `services`: Add/delete operations with persistence and auditing
//! - `reports`: Totals, yearly series, categories, distribution, insights
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting for the CLI
//! - `export`: CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use poupe::config::{PoupePaths, Settings};
//! use poupe::services::LedgerService;
//! use poupe::storage::open_ledger_store;
//!
//! let paths = PoupePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let service = LedgerService::open(open_ledger_store(&paths, &settings)?, &settings, None);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::PoupeError;
