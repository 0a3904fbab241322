//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod report;
pub mod tag;
pub mod transaction;

pub use report::{handle_report_command, ReportCommands};
pub use tag::{handle_tag_command, TagCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TallyError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
