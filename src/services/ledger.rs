//! Ledger service
//!
//! Entry point for callers: records transactions (single or recurring),
//! resolves tags by name, and answers filter and balance queries against
//! the store.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{
    IdGenerator, Period, Recurrence, Tag, TagHierarchy, TimestampIdGenerator, Transaction,
    TransactionDraft, TransactionType, MAX_TAGS,
};
use crate::storage::TransactionStore;

use super::balance::{BalanceSummary, TransactionBalance};
use super::clock::{Clock, SystemClock};
use super::filter::{FilterMode, Filtered, FilteredTransactions, TransactionFilter};
use super::recurrence::expand;

/// Service for recording and querying transactions
pub struct LedgerService<'a, C = SystemClock, G = TimestampIdGenerator> {
    store: &'a dyn TransactionStore,
    clock: C,
    ids: G,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger using the system clock and timestamp ids
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self::with_parts(store, SystemClock, TimestampIdGenerator::new())
    }
}

impl<'a, C: Clock, G: IdGenerator> LedgerService<'a, C, G> {
    pub fn with_parts(store: &'a dyn TransactionStore, clock: C, ids: G) -> Self {
        Self { store, clock, ids }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validate and persist a single transaction
    pub fn add(&mut self, draft: &TransactionDraft) -> TallyResult<Transaction> {
        let txn = draft
            .build(self.ids.next_id())
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.store.save(&txn)?;
        debug!("Recorded {}", txn);
        Ok(txn)
    }

    /// Persist every occurrence of a recurring series, one at a time
    ///
    /// An invalid recurrence fails before anything is written. A failure part
    /// way through leaves the earlier occurrences stored and reports how many
    /// there were.
    pub fn add_recurrence(
        &mut self,
        draft: &TransactionDraft,
        end_date: NaiveDate,
        recurrence: Recurrence,
    ) -> TallyResult<Vec<Transaction>> {
        let store = self.store;
        let mut saved = Vec::new();

        for occurrence in expand(draft, end_date, recurrence, &mut self.ids)? {
            let result = occurrence.and_then(|txn| store.save(&txn).map(|()| txn));
            match result {
                Ok(txn) => saved.push(txn),
                Err(err) if saved.is_empty() => return Err(err),
                Err(err) => {
                    warn!(
                        "Recurring series stopped after {} occurrence(s): {}",
                        saved.len(),
                        err
                    );
                    return Err(TallyError::PartialRecurrence {
                        persisted: saved.len(),
                        source: Box::new(err),
                    });
                }
            }
        }

        info!(
            "Recorded {} occurrence(s) of {} {:.2} repeating {} until {}",
            saved.len(),
            draft.kind,
            draft.amount.abs(),
            recurrence,
            end_date
        );
        Ok(saved)
    }

    /// Every stored transaction; an unreadable store reads as empty
    pub fn transactions(&self) -> Vec<Transaction> {
        self.store.load().or_empty()
    }

    /// Transactions matching `filter`, in stored order
    pub fn filtered_items(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let all = self.transactions();
        FilteredTransactions::new(&all, &self.clock)
            .filtered_items(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Income, expense, balance and tag amounts over both types
    pub fn balance(&self, mode: FilterMode, period: Option<Period>) -> BalanceSummary {
        let all = self.transactions();
        let view = FilteredTransactions::new(&all, &self.clock);

        let income = TransactionFilter::new(TransactionType::Income)
            .mode(mode)
            .period(period);
        let expense = income.with_kind(TransactionType::Expense);

        let selected = view
            .filtered_items(&income)
            .into_iter()
            .chain(view.filtered_items(&expense));
        TransactionBalance::new(selected).summary()
    }

    /// The stored tag hierarchy; an unreadable store reads as empty
    pub fn tag_hierarchy(&self) -> TagHierarchy {
        Self::checked(TagHierarchy::new(self.store.load_tags().or_empty()))
    }

    fn checked(hierarchy: TagHierarchy) -> TagHierarchy {
        if let Err(err) = hierarchy.validate() {
            warn!("Tag hierarchy needs repair: {}", err);
        }
        hierarchy
    }

    /// Look up tags by display name, case-insensitively
    ///
    /// The returned tags carry no parent link.
    pub fn resolve_tags<S: AsRef<str>>(&self, names: &[S]) -> TallyResult<Vec<Tag>> {
        if names.len() > MAX_TAGS {
            return Err(TallyError::Validation(format!(
                "Too many tags ({}, max {})",
                names.len(),
                MAX_TAGS
            )));
        }

        if names.is_empty() {
            return Ok(Vec::new());
        }

        // Recording against an unreadable tag store is an error, not a miss
        let hierarchy = Self::checked(TagHierarchy::new(self.store.load_tags().into_result()?));
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                hierarchy
                    .find_by_name(name)
                    .map(Tag::detached)
                    .ok_or_else(|| TallyError::tag_not_found(name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SequentialIdGenerator, TagId};
    use crate::services::clock::FixedClock;
    use crate::storage::LoadOutcome;
    use std::cell::RefCell;

    /// In-memory store that can be told to reject writes after N saves
    #[derive(Default)]
    struct MemoryStore {
        records: RefCell<Vec<Transaction>>,
        tags: Vec<Tag>,
        tags_unreadable: bool,
        fail_after: Option<usize>,
    }

    impl TransactionStore for MemoryStore {
        fn load(&self) -> LoadOutcome<Transaction> {
            LoadOutcome::from_vec(self.records.borrow().clone())
        }

        fn load_tags(&self) -> LoadOutcome<Tag> {
            if self.tags_unreadable {
                return LoadOutcome::Failed(TallyError::StoreUnavailable("tags.json".into()));
            }
            LoadOutcome::from_vec(self.tags.clone())
        }

        fn save(&self, txn: &Transaction) -> TallyResult<()> {
            let mut records = self.records.borrow_mut();
            if self.fail_after == Some(records.len()) {
                return Err(TallyError::StoreUnavailable("disk full".into()));
            }
            records.push(txn.clone());
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger(store: &MemoryStore) -> LedgerService<'_, FixedClock, SequentialIdGenerator> {
        LedgerService::with_parts(
            store,
            FixedClock(date(2025, 1, 15)),
            SequentialIdGenerator::starting_at(1),
        )
    }

    fn draft(amount: f64, kind: TransactionType, on: NaiveDate) -> TransactionDraft {
        TransactionDraft::new(amount, kind, on, vec![])
    }

    #[test]
    fn test_add_persists() {
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);

        let txn = ledger
            .add(&draft(12.5, TransactionType::Expense, date(2025, 1, 2)))
            .unwrap();

        assert_eq!(txn.id().value(), 1);
        assert_eq!(ledger.transactions(), vec![txn]);
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);

        let err = ledger
            .add(&draft(-1.0, TransactionType::Expense, date(2025, 1, 2)))
            .unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));
        assert!(store.records.borrow().is_empty());
    }

    #[test]
    fn test_add_recurrence_persists_each_occurrence() {
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);

        let saved = ledger
            .add_recurrence(
                &draft(10.0, TransactionType::Expense, date(2025, 1, 1)),
                date(2025, 1, 10),
                Recurrence::Every(5),
            )
            .unwrap();

        assert_eq!(saved.len(), 2);
        let dates: Vec<_> = store.records.borrow().iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 6)]);
    }

    #[test]
    fn test_add_recurrence_none_persists_nothing() {
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);

        let err = ledger
            .add_recurrence(
                &draft(10.0, TransactionType::Income, date(2025, 1, 1)),
                date(2025, 12, 31),
                Recurrence::None,
            )
            .unwrap_err();

        assert!(matches!(err, TallyError::InvalidRecurrence(_)));
        assert!(store.records.borrow().is_empty());
    }

    #[test]
    fn test_add_recurrence_reports_partial_prefix() {
        let store = MemoryStore {
            fail_after: Some(3),
            ..Default::default()
        };
        let mut ledger = ledger(&store);

        let err = ledger
            .add_recurrence(
                &draft(1.0, TransactionType::Expense, date(2025, 1, 1)),
                date(2025, 1, 31),
                Recurrence::daily(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            TallyError::PartialRecurrence { persisted: 3, .. }
        ));
        assert_eq!(store.records.borrow().len(), 3);
    }

    #[test]
    fn test_filtered_items_uses_clock() {
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);
        for day in [10, 15, 20] {
            ledger
                .add(&draft(1.0, TransactionType::Expense, date(2025, 1, day)))
                .unwrap();
        }

        let past = TransactionFilter::new(TransactionType::Expense).mode(FilterMode::Past);
        let dates: Vec<_> = ledger.filtered_items(&past).iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec![date(2025, 1, 10)]);
    }

    #[test]
    fn test_balance_over_both_types() {
        let rent = Tag::new(TagId::new(1), "Rent");
        let store = MemoryStore::default();
        let mut ledger = ledger(&store);

        ledger
            .add(&draft(2000.0, TransactionType::Income, date(2025, 1, 1)))
            .unwrap();
        ledger
            .add(&TransactionDraft::new(
                800.0,
                TransactionType::Expense,
                date(2025, 1, 3),
                vec![rent.clone()],
            ))
            .unwrap();
        ledger
            .add(&draft(50.0, TransactionType::Expense, date(2025, 2, 1)))
            .unwrap();

        let all = ledger.balance(FilterMode::All, None);
        assert_eq!(all.total_income, 2000.0);
        assert_eq!(all.total_expense, 850.0);
        assert_eq!(all.balance, 1150.0);
        assert_eq!(all.tag_amounts[&rent], 800.0);

        let past = ledger.balance(FilterMode::Past, None);
        assert_eq!(past.total_expense, 800.0);
    }

    #[test]
    fn test_resolve_tags() {
        let store = MemoryStore {
            tags: vec![
                Tag::new(TagId::new(1), "Food"),
                Tag::with_parent(TagId::new(2), "Groceries", TagId::new(1)),
            ],
            ..Default::default()
        };
        let ledger = ledger(&store);

        let tags = ledger.resolve_tags(&["groceries"]).unwrap();
        assert_eq!(tags[0].id, TagId::new(2));
        assert!(tags[0].parent.is_none());

        let err = ledger.resolve_tags(&["Travel"]).unwrap_err();
        assert!(err.is_not_found());

        let err = ledger.resolve_tags(&["a", "b", "c", "d"]).unwrap_err();
        assert!(matches!(err, TallyError::Validation(_)));
    }

    #[test]
    fn test_resolve_tags_surfaces_unreadable_store() {
        let store = MemoryStore {
            tags_unreadable: true,
            ..Default::default()
        };
        let ledger = ledger(&store);

        let err = ledger.resolve_tags(&["Rent"]).unwrap_err();
        assert!(matches!(err, TallyError::StoreUnavailable(_)));
        assert!(ledger.resolve_tags::<&str>(&[]).unwrap().is_empty());
        assert!(ledger.tag_hierarchy().is_empty());
    }

    #[test]
    fn test_cyclic_hierarchy_still_resolves_names() {
        let store = MemoryStore {
            tags: vec![
                Tag::with_parent(TagId::new(1), "A", TagId::new(2)),
                Tag::with_parent(TagId::new(2), "B", TagId::new(1)),
            ],
            ..Default::default()
        };
        let ledger = ledger(&store);

        assert_eq!(ledger.tag_hierarchy().len(), 2);
        let tags = ledger.resolve_tags(&["b"]).unwrap();
        assert_eq!(tags[0], Tag::new(TagId::new(2), "B"));
    }
}
