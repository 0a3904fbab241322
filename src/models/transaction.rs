//! Transaction model
//!
//! A transaction is an immutable record of one income or expense. The amount
//! is never negative; direction is carried by [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::tag::Tag;

/// Maximum number of tags on a single transaction
pub const MAX_TAGS: usize = 3;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}


impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A financial transaction
///
/// Fields are private so a value can only exist in a validated state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    amount: f64,
    kind: TransactionType,
    date: NaiveDate,
    tags: Vec<Tag>,
}

impl Transaction {
    /// Create a validated transaction
    pub fn new(
        id: TransactionId,
        amount: f64,
        kind: TransactionType,
        date: NaiveDate,
        tags: Vec<Tag>,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self {
            id,
            amount,
            kind,
            date,
            tags,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }

        if self.amount < 0.0 {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.tags.len() > MAX_TAGS {
            return Err(TransactionValidationError::TooManyTags(self.tags.len()));
        }

        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Err(TransactionValidationError::DuplicateTag(tag.name.clone()));
            }
        }

        Ok(())
    }
}

/// Unvalidated transaction fields, as entered by a user
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub tags: Vec<Tag>,
}

impl TransactionDraft {
    pub fn new(amount: f64, kind: TransactionType, date: NaiveDate, tags: Vec<Tag>) -> Self {
        Self {
            amount,
            kind,
            date,
            tags,
        }
    }

    /// Validate and assign an id
    pub fn build(&self, id: TransactionId) -> Result<Transaction, TransactionValidationError> {
        Transaction::new(id, self.amount, self.kind, self.date, self.tags.clone())
    }

    /// One occurrence of a recurring series: fresh id, given date, amount made non-negative
    pub fn occurrence(
        &self,
        id: TransactionId,
        date: NaiveDate,
    ) -> Result<Transaction, TransactionValidationError> {
        Transaction::new(id, self.amount.abs(), self.kind, date, self.tags.clone())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NegativeAmount(f64),
    NonFiniteAmount,
    TooManyTags(usize),
    DuplicateTag(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount cannot be negative ({}); use the transaction type for direction",
                amount
            ),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::TooManyTags(count) => {
                write!(f, "Too many tags ({}, max {})", count, MAX_TAGS)
            }
            Self::DuplicateTag(name) => write!(f, "Tag '{}' is attached twice", name),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
