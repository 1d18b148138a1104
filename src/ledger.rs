//! Ledger
//!
//! Session object owning every client (and through them every account).

use crate::aggregate::{Account, AccountKind, CheckingPolicy, Client, ClientId, Individual};
use crate::directory::Directory;
use crate::domain::DomainError;

/// Branch code used when nothing else is configured
pub const DEFAULT_BRANCH: &str = "0001";

/// Settings applied to every account the ledger opens
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDefaults {
    pub branch: String,
    pub checking: CheckingPolicy,
}

impl Default for AccountDefaults {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            checking: CheckingPolicy::default(),
        }
    }
}

/// In-memory ledger for one session
#[derive(Debug, Default)]
pub struct Ledger {
    defaults: AccountDefaults,
    clients: Vec<Client>,
}

impl Ledger {
    pub fn new(defaults: AccountDefaults) -> Self {
        Self {
            defaults,
            clients: Vec::new(),
        }
    }

    pub fn defaults(&self) -> &AccountDefaults {
        &self.defaults
    }

    /// Register an individual client. Tax ids are unique.
    pub fn register_client(
        &mut self,
        individual: Individual,
        address: impl Into<String>,
    ) -> Result<ClientId, DomainError> {
        if self.find_client(&individual.tax_id).is_some() {
            tracing::warn!(tax_id = %individual.tax_id, "Duplicate client registration");
            return Err(DomainError::DuplicateTaxId(individual.tax_id));
        }

        let client = Client::individual(individual, address);
        let client_id = client.id();
        tracing::info!(client_id = %client_id, tax_id = client.tax_id(), "Client registered");
        self.clients.push(client);
        Ok(client_id)
    }

    /// Open a checking account with the session's policy
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<u32, DomainError> {
        let kind = AccountKind::Checking(self.defaults.checking);
        self.open_with(tax_id, kind)
    }

    /// Open a standard account
    pub fn open_account(&mut self, tax_id: &str) -> Result<u32, DomainError> {
        self.open_with(tax_id, AccountKind::Standard)
    }

    fn open_with(&mut self, tax_id: &str, kind: AccountKind) -> Result<u32, DomainError> {
        let number = self.next_account_number();
        let branch = self.defaults.branch.clone();
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| DomainError::ClientNotFound(tax_id.to_string()))?;

        Account::open(client, number, branch, kind);
        Ok(number)
    }

    fn next_account_number(&self) -> u32 {
        let count = u32::try_from(self.account_count()).unwrap_or(u32::MAX - 1);
        count + 1
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn account_count(&self) -> usize {
        self.clients.iter().map(|c| c.accounts().len()).sum()
    }

    /// Every account with its owner, in opening order
    pub fn accounts(&self) -> Vec<(&Client, &Account)> {
        let mut all: Vec<_> = self
            .clients
            .iter()
            .flat_map(|client| client.accounts().iter().map(move |account| (client, account)))
            .collect();
        all.sort_by_key(|(_, account)| account.number());
        all
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.clients
            .iter()
            .find_map(|client| client.account(number))
    }

    pub fn account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.clients
            .iter_mut()
            .find_map(|client| client.account_mut(number))
    }

    /// Owner of an account
    pub fn client_of(&self, account: &Account) -> Option<&Client> {
        self.clients
            .iter()
            .find(|client| client.id() == account.client_id())
    }

    /// Owner of the account with this number, for running transactions
    pub fn client_for_account_mut(&mut self, number: u32) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.account(number).is_some())
    }
}

impl Directory for Ledger {
    fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id() == tax_id)
    }

    fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.tax_id() == tax_id)
    }
}
