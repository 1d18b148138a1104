//! Configuration module
//!
//! Loads configuration from environment variables.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::aggregate::checking::{DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};
use crate::aggregate::CheckingPolicy;
use crate::ledger::{AccountDefaults, DEFAULT_BRANCH};

/// How statements are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementFormat {
    Text,
    Json,
}

impl FromStr for StatementFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Branch code stamped on new accounts
    pub branch: String,

    /// Per-operation cap for checking withdrawals
    pub checking_withdrawal_limit: Decimal,

    /// Withdrawal count allowed on a checking account
    pub checking_max_withdrawals: u32,

    /// Statement rendering
    pub statement_format: StatementFormat,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let branch = lookup("BANK_BRANCH").unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        if branch.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BANK_BRANCH"));
        }

        let checking_withdrawal_limit: Decimal = lookup("CHECKING_WITHDRAWAL_LIMIT")
            .unwrap_or_else(|| DEFAULT_WITHDRAWAL_LIMIT.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CHECKING_WITHDRAWAL_LIMIT"))?;
        if checking_withdrawal_limit <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue("CHECKING_WITHDRAWAL_LIMIT"));
        }

        let checking_max_withdrawals = lookup("CHECKING_MAX_WITHDRAWALS")
            .unwrap_or_else(|| DEFAULT_MAX_WITHDRAWALS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("CHECKING_MAX_WITHDRAWALS"))?;

        let statement_format = lookup("STATEMENT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("STATEMENT_FORMAT"))?;

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Self {
            branch,
            checking_withdrawal_limit,
            checking_max_withdrawals,
            statement_format,
            environment,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Settings for accounts opened by the ledger
    pub fn account_defaults(&self) -> AccountDefaults {
        AccountDefaults {
            branch: self.branch.clone(),
            checking: CheckingPolicy::new(
                self.checking_withdrawal_limit,
                self.checking_max_withdrawals,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            checking_withdrawal_limit: Decimal::from(DEFAULT_WITHDRAWAL_LIMIT),
            checking_max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
            statement_format: StatementFormat::Text,
            environment: "development".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
