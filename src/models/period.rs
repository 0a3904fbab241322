//! Date period with optional bounds
//!
//! A missing bound stands for "today", resolved when the period is queried
//! rather than when it is built.

use chrono::NaiveDate;
use std::fmt;

/// An inclusive date range with defaultable bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Period {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build a period only if at least one bound is given
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        if start.is_none() && end.is_none() {
            None
        } else {
            Some(Self::new(start, end))
        }
    }

    /// Start date, or `today` if unset
    pub fn start_or(&self, today: NaiveDate) -> NaiveDate {
        self.start.unwrap_or(today)
    }

    /// End date, or `today` if unset
    pub fn end_or(&self, today: NaiveDate) -> NaiveDate {
        self.end.unwrap_or(today)
    }

    /// Check whether `date` falls in the period, with missing bounds read as today
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_on(date, chrono::Local::now().date_naive())
    }

    /// Same as [`Period::contains`] against an explicit current date
    pub fn contains_on(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start_or(today) <= date && date <= self.end_or(today)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "today".to_string())
        };
        write!(f, "{} to {}", bound(self.start), bound(self.end))
    }
}
