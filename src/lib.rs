//! bank_ledger Library
//!
//! Re-exports modules for integration testing and the terminal binary.

pub mod aggregate;
pub mod config;
pub mod directory;
pub mod domain;
pub mod handlers;
pub mod ledger;
pub mod statement;
pub mod terminal;

mod error;

pub use aggregate::{Account, AccountKind, CheckingPolicy, Client, ClientId, Individual};
pub use config::Config;
pub use directory::Directory;
pub use domain::{Amount, AmountError, Balance, DomainError};
pub use domain::{Deposit, History, HistoryRecord, Transaction, TransactionKind, Withdrawal};
pub use error::{AppError, AppResult};
pub use ledger::{AccountDefaults, Ledger};
