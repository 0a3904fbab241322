//! Tally - tag-based income and expense tracking
//!
//! This library provides the core functionality for the Tally command line
//! tracker. Transactions carry up to three tags drawn from a user-defined
//! hierarchy; recurring transactions are expanded into dated series, and
//! balances can be broken down per tag.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, tags, periods, recurrences)
//! - `storage`: JSON file storage layer
//! - `services`: Filtering, aggregation, recurrence expansion, the ledger
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::paths::TallyPaths;
//! use tally::services::{FilterMode, LedgerService};
//! use tally::storage::Storage;
//!
//! let storage = Storage::new(TallyPaths::new()?)?;
//! let summary = LedgerService::new(&storage).balance(FilterMode::All, None);
//! println!("{:.2}", summary.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TallyError;
