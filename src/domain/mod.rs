//! Domain module
//!
//! Core value types, transactions and the history ledger.

pub mod amount;
pub mod error;
pub mod history;
pub mod transaction;

pub use amount::{Amount, AmountError, Balance};
pub use error::DomainError;
pub use history::{History, HistoryRecord};
pub use transaction::{Deposit, Transaction, TransactionKind, Withdrawal};
