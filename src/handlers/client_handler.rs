//! Client Handlers
//!
//! Registers clients and opens their accounts.

use crate::aggregate::Individual;
use crate::error::AppError;
use crate::ledger::Ledger;

use super::{CreateClientCommand, CreateClientResult, OpenAccountCommand, OpenAccountResult};

/// Handler for client registration
pub struct CreateClientHandler<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> CreateClientHandler<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    pub fn execute(&mut self, command: CreateClientCommand) -> Result<CreateClientResult, AppError> {
        let tax_id = command.tax_id.trim().to_string();
        if tax_id.is_empty() {
            return Err(AppError::InvalidInput("tax id is required".to_string()));
        }

        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::InvalidInput("name is required".to_string()));
        }

        let individual = Individual {
            name,
            birth_date: command.birth_date,
            tax_id: tax_id.clone(),
        };
        let client_id = self
            .ledger
            .register_client(individual, command.address.trim())?;

        Ok(CreateClientResult { client_id, tax_id })
    }
}

/// Handler for opening checking accounts
pub struct OpenAccountHandler<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> OpenAccountHandler<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    pub fn execute(&mut self, command: OpenAccountCommand) -> Result<OpenAccountResult, AppError> {
        let tax_id = command.tax_id.trim();
        let account_number = self.ledger.open_checking_account(tax_id)?;

        Ok(OpenAccountResult {
            account_number,
            branch: self.ledger.defaults().branch.clone(),
            tax_id: tax_id.to_string(),
        })
    }
}
