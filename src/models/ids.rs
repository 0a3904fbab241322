//! Strongly-typed ID wrappers and transaction id generation
//!
//! Ids are plain integers on disk. The newtypes keep tag ids and transaction
//! ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Utc;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw id
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw integer value
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(TagId, "tag-");

/// Source of fresh transaction ids
pub trait IdGenerator {
    /// Produce an id that has not been handed out by this generator before
    fn next_id(&mut self) -> TransactionId;
}

/// Millisecond timestamps, bumped so consecutive ids are strictly increasing
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: Option<i64>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        let now = Utc::now().timestamp_millis();
        let next = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(next);
        TransactionId(next)
    }
}

/// Counts up from a fixed starting point
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: i64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next);
        self.next += 1;
        id
    }
}
