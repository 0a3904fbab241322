//! Recurrence expansion
//!
//! Turns a template transaction into a dated series. The series is produced
//! lazily so each occurrence can be persisted before the next is built.

use chrono::{Days, NaiveDate};

use crate::error::{TallyError, TallyResult};
use crate::models::{IdGenerator, Recurrence, Transaction, TransactionDraft};

/// Expand `template` from its own date through `end_date` inclusive
///
/// Fails with `InvalidRecurrence` when the recurrence has no interval. A
/// template dated after `end_date` yields an empty series.
pub fn expand<'a, G: IdGenerator>(
    template: &'a TransactionDraft,
    end_date: NaiveDate,
    recurrence: Recurrence,
    ids: &'a mut G,
) -> TallyResult<Occurrences<'a, G>> {
    let step = recurrence.days().ok_or_else(|| {
        TallyError::InvalidRecurrence(format!(
            "cannot expand a transaction with recurrence '{}'",
            recurrence
        ))
    })?;

    Ok(Occurrences {
        template,
        end_date,
        step: Days::new(u64::from(step)),
        next_date: Some(template.date),
        ids,
    })
}

/// Lazy series of occurrences produced by [`expand`]
pub struct Occurrences<'a, G: IdGenerator> {
    template: &'a TransactionDraft,
    end_date: NaiveDate,
    step: Days,
    next_date: Option<NaiveDate>,
    ids: &'a mut G,
}

impl<G: IdGenerator> Iterator for Occurrences<'_, G> {
    type Item = TallyResult<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next_date.filter(|d| *d <= self.end_date)?;
        self.next_date = date.checked_add_days(self.step);

        let occurrence = self
            .template
            .occurrence(self.ids.next_id(), date)
            .map_err(|e| TallyError::Validation(e.to_string()));

        // A template that fails validation fails every occurrence
        if occurrence.is_err() {
            self.next_date = None;
        }
        Some(occurrence)
    }
}
