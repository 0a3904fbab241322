//! Transaction repository for JSON storage
//!
//! Manages loading and appending transactions to transactions.json

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TallyError;
use crate::models::{Tag, TagId, Transaction, TransactionId, TransactionType};

use super::file_io::{read_json, write_json_atomic};
use super::outcome::LoadOutcome;

/// Tag reference as stored on a transaction: id and name only
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTagRef {
    id: TagId,
    name: String,
}

/// On-disk shape of one transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTransaction {
    id: TransactionId,
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionType,
    date: NaiveDate,
    #[serde(default)]
    tags: Vec<StoredTagRef>,
}

impl From<&Transaction> for StoredTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id(),
            amount: txn.amount(),
            kind: txn.kind(),
            date: txn.date(),
            tags: txn
                .tags()
                .iter()
                .map(|t| StoredTagRef {
                    id: t.id,
                    name: t.name.clone(),
                })
                .collect(),
        }
    }
}

impl StoredTransaction {
    /// Rebuild the model; tags come back as standalone nodes without parents
    fn into_transaction(self) -> Result<Transaction, TallyError> {
        let tags = self
            .tags
            .into_iter()
            .map(|t| Tag::new(t.id, t.name))
            .collect();
        Transaction::new(self.id, self.amount, self.kind, self.date, tags)
            .map_err(|e| TallyError::Validation(format!("transaction {}: {}", self.id, e)))
    }
}

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<StoredTransaction>,
}

/// Append-only repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all transactions in stored order
    ///
    /// Records that fail validation are skipped with a warning; an unreadable
    /// file is reported as `Failed`.
    pub fn load(&self) -> LoadOutcome<Transaction> {
        let data: TransactionData = match read_json(&self.path) {
            Ok(Some(data)) => data,
            Ok(None) => return LoadOutcome::Empty,
            Err(err) => return LoadOutcome::Failed(err),
        };

        let transactions: Vec<_> = data
            .transactions
            .into_iter()
            .filter_map(|stored| match stored.into_transaction() {
                Ok(txn) => Some(txn),
                Err(err) => {
                    warn!("Skipping invalid stored record: {}", err);
                    None
                }
            })
            .collect();

        debug!(
            "Loaded {} transaction(s) from {}",
            transactions.len(),
            self.path.display()
        );
        LoadOutcome::from_vec(transactions)
    }

    /// Append one transaction, creating the file if absent
    ///
    /// Either the record is durably written or the file is left as it was.
    /// An unreadable existing file is never overwritten.
    pub fn save(&self, txn: &Transaction) -> Result<(), TallyError> {
        let mut data: TransactionData = read_json(&self.path)?.unwrap_or_default();

        if data.transactions.iter().any(|t| t.id == txn.id()) {
            return Err(TallyError::Validation(format!(
                "transaction id {} already exists",
                txn.id()
            )));
        }

        data.transactions.push(StoredTransaction::from(txn));
        write_json_atomic(&self.path, &data)?;

        debug!("Saved transaction {} ({})", txn.id(), txn);
        Ok(())
    }
}
