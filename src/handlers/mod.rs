//! Command Handlers module
//!
//! Teller operations that resolve clients through the directory and
//! coordinate the aggregates.

mod client_handler;
mod commands;
mod transaction_handler;

#[cfg(test)]
mod tests;

pub use client_handler::{CreateClientHandler, OpenAccountHandler};
pub use commands::*;
pub use transaction_handler::{DepositHandler, WithdrawHandler};
