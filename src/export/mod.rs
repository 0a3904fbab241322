//! Export module for Tally
//!
//! Writes transaction registers and balance breakdowns as CSV for use in
//! spreadsheets.

pub mod csv;

pub use self::csv::{export_balance_csv, export_to_file, export_transactions_csv};
