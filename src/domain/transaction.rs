//! Transactions
//!
//! Operations a client can run against one of its accounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::Account;

use super::{Balance, DomainError};

/// Transaction kind as written to history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that moves money on an account.
///
/// `apply` only touches the balance. Recording the attempt in history is the
/// job of [`Client::execute`](crate::aggregate::Client::execute).
pub trait Transaction {
    fn kind(&self) -> TransactionKind;

    /// Amount as supplied at construction.
    fn amount(&self) -> Decimal;

    /// Mutate the account balance, returning the balance afterwards.
    fn apply(&self, account: &mut Account) -> Result<Balance, DomainError>;
}

/// Money paid into an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    amount: Decimal,
}

impl Deposit {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl Transaction for Deposit {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Deposit
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn apply(&self, account: &mut Account) -> Result<Balance, DomainError> {
        account.credit(self.amount)
    }
}

/// Money taken out of an account.
///
/// Only the balance is checked here; checking-account caps apply to
/// [`Account::withdraw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    amount: Decimal,
}

impl Withdrawal {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl Transaction for Withdrawal {
    fn kind(&self) -> TransactionKind {
        TransactionKind::Withdrawal
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn apply(&self, account: &mut Account) -> Result<Balance, DomainError> {
        let available = account.balance();
        if !available.is_sufficient_for(self.amount) {
            return Err(DomainError::insufficient_funds(self.amount, available.value()));
        }
        account.debit(self.amount)
    }
}
