//! Client Aggregate
//!
//! A client owns its accounts and is the only way to run a recorded
//! transaction against one of them.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Balance, DomainError, Transaction};

use super::Account;

/// Identifier accounts use to refer to their owner
pub type ClientId = Uuid;

/// Natural person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Unique across clients
    pub tax_id: String,
}

/// Who the client is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClientProfile {
    Individual(Individual),
}

/// Client Aggregate
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    /// Unique client ID
    id: ClientId,

    /// Postal address
    address: String,

    /// Identity data
    profile: ClientProfile,

    /// Accounts in opening order
    accounts: Vec<Account>,
}

impl Client {
    /// Create an individual client with no accounts
    pub fn individual(individual: Individual, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: address.into(),
            profile: ClientProfile::Individual(individual),
            accounts: Vec::new(),
        }
    }

    // =========================================================================
    // Transaction mediation
    // =========================================================================

    /// Apply `transaction` to one of this client's accounts and record it.
    ///
    /// The history record is appended whether `apply` succeeded or not, so
    /// failed attempts show up in the statement and count toward checking
    /// account caps.
    pub fn execute<T: Transaction>(
        &mut self,
        account_number: u32,
        transaction: T,
    ) -> Result<Balance, DomainError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == account_number)
            .ok_or_else(|| DomainError::AccountNotFound(account_number.to_string()))?;

        let outcome = transaction.apply(account);
        account
            .history_mut()
            .record(transaction.kind(), transaction.amount());

        match &outcome {
            Ok(balance) => tracing::info!(
                account = account_number,
                kind = %transaction.kind(),
                amount = %transaction.amount(),
                balance = %balance,
                "Transaction executed"
            ),
            Err(e) => tracing::warn!(
                account = account_number,
                kind = %transaction.kind(),
                amount = %transaction.amount(),
                error = %e,
                "Transaction refused"
            ),
        }

        outcome
    }

    /// Append an account to this client's collection
    pub fn add_account(&mut self, account: Account) -> &mut Account {
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn name(&self) -> &str {
        match &self.profile {
            ClientProfile::Individual(individual) => &individual.name,
        }
    }

    pub fn tax_id(&self) -> &str {
        match &self.profile {
            ClientProfile::Individual(individual) => &individual.tax_id,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        match &self.profile {
            ClientProfile::Individual(individual) => individual.birth_date,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Mutable access for the direct deposit / withdraw API
    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    pub fn account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }
}
