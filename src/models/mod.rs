//! Core data models for Tally
//!
//! This module contains the data structures of the tracking domain:
//! transactions, tags and their hierarchy, periods, and recurrences.

pub mod ids;
pub mod period;
pub mod recurrence;
pub mod tag;
pub mod transaction;

pub use ids::{IdGenerator, SequentialIdGenerator, TagId, TimestampIdGenerator, TransactionId};
pub use period::Period;
pub use recurrence::Recurrence;
pub use tag::{Tag, TagHierarchy, TagListing};
pub use transaction::{
    Transaction, TransactionDraft, TransactionType, TransactionValidationError, MAX_TAGS,
};
