//! Filter engine
//!
//! Selects transactions of one type by temporal mode and optional period.
//! Filtering is stable: matches keep their relative input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Period, Transaction, TransactionType};

use super::clock::Clock;

/// Temporal selection relative to today
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// No temporal constraint
    #[default]
    All,
    /// Strictly before today
    Past,
    /// Strictly after today
    Future,
}

impl FilterMode {
    /// Whether `date` passes this mode
    pub fn admits(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Past => date < today,
            Self::Future => date > today,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Past => write!(f, "past"),
            Self::Future => write!(f, "future"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "past" => Ok(Self::Past),
            "future" => Ok(Self::Future),
            other => Err(format!(
                "unknown filter mode '{}' (expected all, past or future)",
                other
            )),
        }
    }
}

/// Criteria for selecting transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: TransactionType,
    pub mode: FilterMode,
    pub period: Option<Period>,
}

impl TransactionFilter {
    /// Filter for one transaction type with no temporal constraint
    pub fn new(kind: TransactionType) -> Self {
        Self {
            kind,
            mode: FilterMode::All,
            period: None,
        }
    }

    pub fn mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn period(mut self, period: Option<Period>) -> Self {
        self.period = period;
        self
    }

    /// Same mode and period, different type
    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = kind;
        self
    }

    /// Check one transaction against every criterion
    pub fn matches(&self, txn: &Transaction, today: NaiveDate) -> bool {
        txn.kind() == self.kind
            && self.mode.admits(txn.date(), today)
            && self
                .period
                .map_or(true, |p| p.contains_on(txn.date(), today))
    }

    /// Select matching transactions in input order
    pub fn apply<'a>(
        &self,
        transactions: &'a [Transaction],
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn, today))
            .collect()
    }
}

/// Something that can produce a filtered view of its transactions
pub trait Filtered {
    fn filtered_items(&self, filter: &TransactionFilter) -> Vec<&Transaction>;
}

/// A transaction slice paired with the clock that defines "today"
pub struct FilteredTransactions<'a, C: Clock> {
    transactions: &'a [Transaction],
    clock: C,
}

impl<'a, C: Clock> FilteredTransactions<'a, C> {
    pub fn new(transactions: &'a [Transaction], clock: C) -> Self {
        Self {
            transactions,
            clock,
        }
    }
}

impl<C: Clock> Filtered for FilteredTransactions<'_, C> {
    fn filtered_items(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(self.transactions, self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use crate::services::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: i64, kind: TransactionType, on: NaiveDate) -> Transaction {
        Transaction::new(TransactionId::new(id), 10.0, kind, on, vec![]).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, TransactionType::Expense, date(2025, 1, 10)),
            txn(2, TransactionType::Income, date(2025, 1, 12)),
            txn(3, TransactionType::Expense, date(2025, 1, 15)),
            txn(4, TransactionType::Expense, date(2025, 1, 20)),
            txn(5, TransactionType::Income, date(2025, 1, 25)),
        ]
    }

    fn ids(items: &[&Transaction]) -> Vec<i64> {
        items.iter().map(|t| t.id().value()).collect()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 15)
    }

    #[test]
    fn test_type_filter_preserves_order() {
        let data = sample();
        let expenses = TransactionFilter::new(TransactionType::Expense).apply(&data, today());
        assert_eq!(ids(&expenses), vec![1, 3, 4]);

        let income = TransactionFilter::new(TransactionType::Income).apply(&data, today());
        assert_eq!(ids(&income), vec![2, 5]);
    }

    #[test]
    fn test_past_and_future_exclude_today() {
        let data = sample();
        let past = TransactionFilter::new(TransactionType::Expense)
            .mode(FilterMode::Past)
            .apply(&data, today());
        assert_eq!(ids(&past), vec![1]);

        let future = TransactionFilter::new(TransactionType::Expense)
            .mode(FilterMode::Future)
            .apply(&data, today());
        assert_eq!(ids(&future), vec![4]);
    }

    #[test]
    fn test_period_constraint() {
        let data = sample();
        let period = Period::new(Some(date(2025, 1, 11)), Some(date(2025, 1, 20)));
        let filter = TransactionFilter::new(TransactionType::Expense).period(Some(period));
        assert_eq!(ids(&filter.apply(&data, today())), vec![3, 4]);

        // Open end reads as today
        let open = TransactionFilter::new(TransactionType::Expense)
            .period(Some(Period::new(Some(date(2025, 1, 11)), None)));
        assert_eq!(ids(&open.apply(&data, today())), vec![3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = sample();
        let filter = TransactionFilter::new(TransactionType::Expense).mode(FilterMode::Past);
        let once: Vec<Transaction> = filter.apply(&data, today()).into_iter().cloned().collect();
        let twice = filter.apply(&once, today());
        assert_eq!(ids(&twice), once.iter().map(|t| t.id().value()).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_input() {
        let filter = TransactionFilter::new(TransactionType::Income);
        assert!(filter.apply(&[], today()).is_empty());
    }

    #[test]
    fn test_filtered_transactions_uses_clock() {
        let data = sample();
        let view = FilteredTransactions::new(&data, FixedClock(date(2025, 1, 21)));
        let filter = TransactionFilter::new(TransactionType::Expense).mode(FilterMode::Past);
        assert_eq!(ids(&view.filtered_items(&filter)), vec![1, 3, 4]);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("PAST".parse::<FilterMode>(), Ok(FilterMode::Past));
        assert_eq!("future".parse::<FilterMode>(), Ok(FilterMode::Future));
        assert!("soon".parse::<FilterMode>().is_err());
        assert_eq!(FilterMode::default(), FilterMode::All);
    }
}
