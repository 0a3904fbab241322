//! Service layer for Tally
//!
//! The service layer provides the domain logic on top of the storage layer:
//! filtering, aggregation, recurrence expansion, and the ledger that ties
//! them to the store.

pub mod balance;
pub mod clock;
pub mod filter;
pub mod ledger;
pub mod recurrence;

pub use balance::{BalanceSummary, TagShare, TransactionBalance};
pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{FilterMode, Filtered, FilteredTransactions, TransactionFilter};
pub use ledger::LedgerService;
pub use recurrence::{expand, Occurrences};
