//! Account Aggregate
//!
//! Holds a balance and the history of transactions run through its owner.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Amount, Balance, DomainError, History};

use super::{CheckingPolicy, Client, ClientId};

/// Account variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountKind {
    Standard,
    Checking(CheckingPolicy),
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Checking(_) => "checking",
        }
    }
}

/// Account Aggregate
///
/// Balance changes come either from [`Account::deposit`] / [`Account::withdraw`]
/// (no history written) or from [`Client::execute`] (history written).
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Account number, unique within a ledger
    number: u32,

    /// Branch code
    branch: String,

    /// Owner client ID
    client_id: ClientId,

    /// Standard or checking
    kind: AccountKind,

    /// Current balance
    balance: Balance,

    /// Attempted transactions
    history: History,

    /// When the account was opened
    opened_at: DateTime<Utc>,
}

impl Account {
    pub(crate) fn new(
        number: u32,
        branch: impl Into<String>,
        client_id: ClientId,
        kind: AccountKind,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            client_id,
            kind,
            balance: Balance::zero(),
            history: History::new(),
            opened_at: Utc::now(),
        }
    }

    /// Open an account for `client` and register it in the client's accounts.
    pub fn open<'c>(
        client: &'c mut Client,
        number: u32,
        branch: impl Into<String>,
        kind: AccountKind,
    ) -> &'c mut Account {
        let account = Self::new(number, branch, client.id(), kind);
        tracing::info!(
            account = number,
            client_id = %client.id(),
            kind = account.kind.label(),
            "Account opened"
        );
        client.add_account(account)
    }

    // =========================================================================
    // Direct operations
    // =========================================================================

    /// Deposit money. Fails on a non-positive amount.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        self.credit(amount)
    }

    /// Withdraw money.
    ///
    /// Checking accounts evaluate their policy first; then the amount must be
    /// covered by the balance and be positive.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        self.check_withdrawal_policy(amount)?;

        if amount > self.balance.value() {
            return Err(DomainError::insufficient_funds(amount, self.balance.value()));
        }
        self.debit(amount)
    }

    /// Run the tier caps of this account without moving money.
    pub fn check_withdrawal_policy(&self, amount: Decimal) -> Result<(), DomainError> {
        match &self.kind {
            AccountKind::Standard => Ok(()),
            AccountKind::Checking(policy) => policy.check(amount, &self.history),
        }
    }

    pub(crate) fn credit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.credit(&amount)?;
        Ok(self.balance)
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        self.balance = self.balance.debit(&amount)?;
        Ok(self.balance)
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn checking_policy(&self) -> Option<&CheckingPolicy> {
        match &self.kind {
            AccountKind::Checking(policy) => Some(policy),
            AccountKind::Standard => None,
        }
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}
