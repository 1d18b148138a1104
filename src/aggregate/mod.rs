//! Aggregate module
//!
//! Clients and the accounts they own.

pub mod account;
pub mod checking;
pub mod client;

pub use account::{Account, AccountKind};
pub use checking::CheckingPolicy;
pub use client::{Client, ClientId, ClientProfile, Individual};
