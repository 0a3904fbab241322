//! Storage layer for Tally
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Reads report failures through [`LoadOutcome`] instead of
//! silently returning nothing.

pub mod file_io;
pub mod init;
pub mod outcome;
pub mod tags;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use outcome::LoadOutcome;
pub use tags::{TagNode, TagRepository};
pub use transactions::TransactionRepository;

use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::{Tag, Transaction};

/// Backing store for transactions and the tag hierarchy
pub trait TransactionStore {
    /// Every persisted transaction, in stored order
    fn load(&self) -> LoadOutcome<Transaction>;

    /// Every known tag with its parent link
    fn load_tags(&self) -> LoadOutcome<Tag>;

    /// Durably append one transaction
    fn save(&self, txn: &Transaction) -> Result<(), TallyError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TallyPaths,
    pub transactions: TransactionRepository,
    pub tags: TagRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            tags: TagRepository::new(paths.tags_file()),
            paths,
        })
    }

    /// Check whether `tally init` has run
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl TransactionStore for Storage {
    fn load(&self) -> LoadOutcome<Transaction> {
        self.transactions.load()
    }

    fn load_tags(&self) -> LoadOutcome<Tag> {
        self.tags.load_tags()
    }

    fn save(&self, txn: &Transaction) -> Result<(), TallyError> {
        self.transactions.save(txn)
    }
}
