//! Balance aggregation
//!
//! Totals and per-tag expense amounts over an already filtered set of
//! transactions. Sums run in input order.

use std::collections::BTreeMap;

use crate::models::{Tag, Transaction, TransactionType};

/// Aggregates over a borrowed set of transactions
pub struct TransactionBalance<'a> {
    transactions: Vec<&'a Transaction>,
}

impl<'a> TransactionBalance<'a> {
    pub fn new<I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        Self {
            transactions: transactions.into_iter().collect(),
        }
    }

    fn total_of(&self, kind: TransactionType) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind() == kind)
            .map(|t| t.amount())
            .sum()
    }

    pub fn total_income(&self) -> f64 {
        self.total_of(TransactionType::Income)
    }

    pub fn total_expense(&self) -> f64 {
        self.total_of(TransactionType::Expense)
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Expense amount per tag
    ///
    /// Each expense adds its full amount to every tag it carries, so the
    /// values can sum to more than the total expense.
    pub fn tag_amount_map(&self) -> BTreeMap<Tag, f64> {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .flat_map(|t| t.tags().iter().map(move |tag| (tag, t.amount())))
            .fold(BTreeMap::new(), |mut map, (tag, amount)| {
                *map.entry(tag.clone()).or_insert(0.0) += amount;
                map
            })
    }

    /// Snapshot every aggregate
    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary {
            total_income: self.total_income(),
            total_expense: self.total_expense(),
            balance: self.balance(),
            tag_amounts: self.tag_amount_map(),
        }
    }
}

/// Computed aggregates ready for display or export
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub tag_amounts: BTreeMap<Tag, f64>,
}

/// One row of the per-tag breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct TagShare {
    pub tag: Tag,
    pub amount: f64,
    /// Share of total expense, 0 to 100
    pub percentage: f64,
}

impl BalanceSummary {
    /// Tag amounts, largest first
    pub fn tag_breakdown(&self) -> Vec<TagShare> {
        let mut rows: Vec<TagShare> = self
            .tag_amounts
            .iter()
            .map(|(tag, &amount)| TagShare {
                tag: tag.clone(),
                amount,
                percentage: if self.total_expense > 0.0 {
                    amount / self.total_expense * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        rows.sort_by(|a, b| {
            b.amount
                .total_cmp(&a.amount)
                .then_with(|| a.tag.cmp(&b.tag))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TagId, TransactionId};
    use chrono::NaiveDate;

    fn tag(id: i64, name: &str) -> Tag {
        Tag::new(TagId::new(id), name)
    }

    fn txn(id: i64, amount: f64, kind: TransactionType, tags: Vec<Tag>) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            amount,
            kind,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            tags,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Transaction> = Vec::new();
        let balance = TransactionBalance::new(&none);
        assert_eq!(balance.total_income(), 0.0);
        assert_eq!(balance.total_expense(), 0.0);
        assert_eq!(balance.balance(), 0.0);
        assert!(balance.tag_amount_map().is_empty());
    }

    #[test]
    fn test_totals() {
        let data = vec![
            txn(1, 1000.0, TransactionType::Income, vec![]),
            txn(2, 250.5, TransactionType::Expense, vec![]),
            txn(3, 49.5, TransactionType::Expense, vec![]),
            txn(4, 20.0, TransactionType::Income, vec![]),
        ];
        let balance = TransactionBalance::new(&data);

        assert_eq!(balance.total_income(), 1020.0);
        assert_eq!(balance.total_expense(), 300.0);
        assert_eq!(
            balance.balance(),
            balance.total_income() - balance.total_expense()
        );
    }

    #[test]
    fn test_full_amount_to_every_tag() {
        let food = tag(1, "Food");
        let eating_out = tag(2, "Eating out");
        let data = vec![
            txn(1, 100.0, TransactionType::Expense, vec![food.clone(), eating_out.clone()]),
            txn(2, 30.0, TransactionType::Expense, vec![food.clone()]),
        ];

        let map = TransactionBalance::new(&data).tag_amount_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&food], 130.0);
        assert_eq!(map[&eating_out], 100.0);
    }

    #[test]
    fn test_income_tags_not_counted() {
        let salary = tag(9, "Salary");
        let rent = tag(3, "Rent");
        let data = vec![
            txn(1, 2000.0, TransactionType::Income, vec![salary.clone()]),
            txn(2, 800.0, TransactionType::Expense, vec![rent.clone()]),
        ];

        let map = TransactionBalance::new(&data).tag_amount_map();
        assert!(!map.contains_key(&salary));
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec![rent]);
    }

    #[test]
    fn test_tag_breakdown_sorted_with_percentages() {
        let data = vec![
            txn(1, 25.0, TransactionType::Expense, vec![tag(1, "Food")]),
            txn(2, 75.0, TransactionType::Expense, vec![tag(2, "Rent")]),
        ];
        let summary = TransactionBalance::new(&data).summary();
        let rows = summary.tag_breakdown();

        assert_eq!(rows[0].tag.name, "Rent");
        assert_eq!(rows[0].percentage, 75.0);
        assert_eq!(rows[1].tag.name, "Food");
        assert_eq!(rows[1].percentage, 25.0);
        assert_eq!(summary.balance, -100.0);
    }
}
