//! Common test utilities

#![allow(dead_code)]

use bank_ledger::{AccountDefaults, CheckingPolicy, Individual, Ledger};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const TAX_ID: &str = "111";

pub fn individual(tax_id: &str) -> Individual {
    Individual {
        name: "Ana Souza".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        tax_id: tax_id.to_string(),
    }
}

/// Ledger with client "111" holding checking account #1 (given limit / cap)
pub fn ledger_with_checking(limit: Decimal, max_withdrawals: u32) -> (Ledger, u32) {
    let defaults = AccountDefaults {
        branch: "0001".to_string(),
        checking: CheckingPolicy::new(limit, max_withdrawals),
    };
    let mut ledger = Ledger::new(defaults);
    ledger
        .register_client(individual(TAX_ID), "Rua A, 10 - Centro - Recife/PE")
        .expect("register client");
    let number = ledger
        .open_checking_account(TAX_ID)
        .expect("open checking account");
    (ledger, number)
}

/// Ledger with client "111" holding standard account #1
pub fn ledger_with_standard() -> (Ledger, u32) {
    let mut ledger = Ledger::default();
    ledger
        .register_client(individual(TAX_ID), "Rua A, 10 - Centro - Recife/PE")
        .expect("register client");
    let number = ledger.open_account(TAX_ID).expect("open account");
    (ledger, number)
}
