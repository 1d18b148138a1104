//! Error handling module
//!
//! Centralized error types for the teller handlers and the terminal.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Errors the user can recover from by trying again
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::Domain(_))
    }

    /// Message shown on the terminal
    pub fn user_message(&self) -> String {
        use crate::domain::DomainError;

        match self {
            AppError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            AppError::Domain(err) => match err {
                DomainError::InvalidAmount(_) => "The amount entered is invalid.".to_string(),
                DomainError::InsufficientFunds { .. } => {
                    "You do not have sufficient funds.".to_string()
                }
                DomainError::LimitExceeded { limit, .. } => {
                    format!("Withdrawal exceeds the limit of {:.2}.", limit)
                }
                DomainError::WithdrawalCountExceeded { .. } => {
                    "Maximum number of withdrawals exceeded.".to_string()
                }
                DomainError::ClientNotFound(_) => "Client not found.".to_string(),
                DomainError::AccountNotFound(_) => "Account not found.".to_string(),
                DomainError::DuplicateTaxId(_) => {
                    "A client with this tax id already exists.".to_string()
                }
                DomainError::Overflow => "Balance overflow.".to_string(),
            },
            other => other.to_string(),
        }
    }
}
