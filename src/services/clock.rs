//! Source of the current date
//!
//! Services that compare against "today" take a clock so tests can pin it.

use chrono::{Local, NaiveDate};

/// Provides the current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the system's local date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
