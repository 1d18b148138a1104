//! Transaction Handlers
//!
//! Deposits and withdrawals requested at the teller. Both run through the
//! owning client so the attempt lands in the account history.

use crate::directory::Directory;
use crate::domain::{Amount, Deposit, DomainError, Transaction, Withdrawal};
use crate::error::AppError;
use crate::ledger::Ledger;

use super::{DepositCommand, TransactionResult, WithdrawCommand};

/// Handler for deposits
pub struct DepositHandler<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> DepositHandler<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    pub fn execute(&mut self, command: DepositCommand) -> Result<TransactionResult, AppError> {
        let number = resolve_account(self.ledger, &command.tax_id)?;
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        execute(self.ledger, &command.tax_id, number, Deposit::new(amount.value()))
    }
}

/// Handler for withdrawals
pub struct WithdrawHandler<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> WithdrawHandler<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Withdraw after the account's tier caps allow it.
    ///
    /// A refusal by the caps is not recorded; anything that reaches the
    /// client is, including insufficient funds.
    pub fn execute(&mut self, command: WithdrawCommand) -> Result<TransactionResult, AppError> {
        let number = resolve_account(self.ledger, &command.tax_id)?;
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        let account = self
            .ledger
            .account(number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))?;
        if let Err(e) = account.check_withdrawal_policy(amount.value()) {
            tracing::warn!(account = number, amount = %amount, error = %e, "Withdrawal refused by policy");
            return Err(e.into());
        }

        execute(self.ledger, &command.tax_id, number, Withdrawal::new(amount.value()))
    }
}

/// Number of the account a tax id resolves to
fn resolve_account(ledger: &Ledger, tax_id: &str) -> Result<u32, DomainError> {
    let tax_id = tax_id.trim();
    if ledger.find_client(tax_id).is_none() {
        return Err(DomainError::ClientNotFound(tax_id.to_string()));
    }
    ledger
        .find_account(tax_id)
        .map(|account| account.number())
        .ok_or_else(|| DomainError::AccountNotFound(tax_id.to_string()))
}

fn execute<T: Transaction>(
    ledger: &mut Ledger,
    tax_id: &str,
    number: u32,
    transaction: T,
) -> Result<TransactionResult, AppError> {
    let kind = transaction.kind();
    let amount = transaction.amount();

    let client = ledger
        .find_client_mut(tax_id.trim())
        .ok_or_else(|| DomainError::ClientNotFound(tax_id.to_string()))?;
    let balance = client.execute(number, transaction)?;

    let history_len = client
        .account(number)
        .map(|account| account.history().len())
        .unwrap_or_default();

    Ok(TransactionResult {
        account_number: number,
        kind,
        amount,
        balance,
        history_len,
    })
}
