//! Account statements
//!
//! Read-only snapshots of an account for display or export.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::aggregate::{Account, Client};
use crate::domain::{Balance, HistoryRecord};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// At least two decimal places, more when the amount carries them
fn format_amount(amount: Decimal) -> String {
    let places = amount.scale().max(2) as usize;
    format!("{:.*}", places, amount)
}

/// Statement of one account
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub branch: String,
    pub account_number: u32,
    pub holder: String,
    pub records: Vec<HistoryRecord>,
    pub balance: Balance,
}

impl Statement {
    pub fn for_account(account: &Account, holder: &Client) -> Self {
        Self {
            branch: account.branch().to_string(),
            account_number: account.number(),
            holder: holder.name().to_string(),
            records: account.history().records().to_vec(),
            balance: account.balance(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ STATEMENT ================")?;
        if self.records.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for record in &self.records {
            writeln!(
                f,
                "Transaction: {}, Amount: {}, Date: {}",
                record.kind,
                format_amount(record.amount),
                record.timestamp.format(DATE_FORMAT)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Balance:\t\t$ {}", self.balance)?;
        write!(f, "===========================================")
    }
}

/// One line of the account listing
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub branch: String,
    pub account_number: u32,
    pub holder: String,
    pub opened_at: DateTime<Utc>,
}

impl AccountSummary {
    pub fn new(account: &Account, holder: &Client) -> Self {
        Self {
            branch: account.branch().to_string(),
            account_number: account.number(),
            holder: holder.name().to_string(),
            opened_at: account.opened_at(),
        }
    }
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch)?;
        writeln!(f, "Account:\t{}", self.account_number)?;
        writeln!(f, "Holder:\t\t{}", self.holder)?;
        write!(f, "Opened:\t\t{}", self.opened_at.format(DATE_FORMAT))
    }
}
