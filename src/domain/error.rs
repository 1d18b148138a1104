//! Domain Error Types
//!
//! Pure domain errors that don't depend on the terminal or configuration.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Outcomes of a refused ledger operation.
///
/// None of these are fatal. They are returned to the immediate caller, which
/// decides what the user sees.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Checking-account withdrawal above the per-operation cap
    #[error("Withdrawal limit exceeded: requested {requested}, limit {limit}")]
    LimitExceeded { requested: Decimal, limit: Decimal },

    /// Checking account already reached its withdrawal count
    #[error("Maximum number of withdrawals reached ({max})")]
    WithdrawalCountExceeded { max: u32 },

    /// No client matches the identifier
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// No account matches the identifier
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Tax id is already registered
    #[error("A client with tax id {0} already exists")]
    DuplicateTaxId(String),

    /// Balance arithmetic left the representable range
    #[error("Balance overflow")]
    Overflow,
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ClientNotFound(_) | Self::AccountNotFound(_))
    }
}

impl From<AmountError> for DomainError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::NotPositive(value) | AmountError::Negative(value) => {
                Self::InvalidAmount(value)
            }
            AmountError::Overflow => Self::Overflow,
            AmountError::ParseError(_) => Self::InvalidAmount(Decimal::ZERO),
        }
    }
}
