//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, tags, and balance reports
//! for terminal display.

pub mod balance;
pub mod tag;
pub mod transaction;

pub use balance::{format_balance_report, format_scope};
pub use tag::format_tag_tree;
pub use transaction::{format_transaction_register, format_transaction_short};
