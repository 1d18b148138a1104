//! Command definitions
//!
//! Commands represent a teller's intention to change the ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Balance, TransactionKind};

/// Command to register a new individual client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientCommand {
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

impl CreateClientCommand {
    pub fn new(tax_id: String, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
        }
    }
}

/// Command to open a checking account for an existing client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountCommand {
    pub tax_id: String,
}

impl OpenAccountCommand {
    pub fn new(tax_id: String) -> Self {
        Self { tax_id }
    }
}

/// Command to deposit into the client's account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositCommand {
    pub tax_id: String,
    pub amount: Decimal,
}

impl DepositCommand {
    pub fn new(tax_id: String, amount: Decimal) -> Self {
        Self { tax_id, amount }
    }
}

/// Command to withdraw from the client's account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawCommand {
    pub tax_id: String,
    pub amount: Decimal,
}

impl WithdrawCommand {
    pub fn new(tax_id: String, amount: Decimal) -> Self {
        Self { tax_id, amount }
    }
}

/// Result of a successful client registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientResult {
    pub client_id: Uuid,
    pub tax_id: String,
}

/// Result of a successful account opening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountResult {
    pub account_number: u32,
    pub branch: String,
    pub tax_id: String,
}

/// Result of a successful deposit or withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResult {
    pub account_number: u32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance: Balance,
    /// History length after the transaction was recorded
    pub history_len: usize,
}
