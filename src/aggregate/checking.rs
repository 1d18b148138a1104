//! Checking account policy
//!
//! Tier rules layered on top of the ordinary withdrawal checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, History, TransactionKind};

/// Per-operation cap used when nothing else is configured
pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;

/// Withdrawal count used when nothing else is configured
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;

/// Withdrawal policy of a checking account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingPolicy {
    withdrawal_limit: Decimal,
    max_withdrawals: u32,
}

impl CheckingPolicy {
    pub fn new(withdrawal_limit: Decimal, max_withdrawals: u32) -> Self {
        Self {
            withdrawal_limit,
            max_withdrawals,
        }
    }

    pub fn withdrawal_limit(&self) -> Decimal {
        self.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    /// Evaluate the tier caps for a withdrawal of `amount`.
    ///
    /// The count cap is checked before the per-operation limit, and both run
    /// before any balance check. Withdrawal records in `history` count
    /// whether or not they succeeded.
    pub fn check(&self, amount: Decimal, history: &History) -> Result<(), DomainError> {
        let withdrawals = history.count_of(TransactionKind::Withdrawal);
        if withdrawals >= self.max_withdrawals as usize {
            return Err(DomainError::WithdrawalCountExceeded {
                max: self.max_withdrawals,
            });
        }

        if amount > self.withdrawal_limit {
            return Err(DomainError::LimitExceeded {
                requested: amount,
                limit: self.withdrawal_limit,
            });
        }

        Ok(())
    }

    /// Withdrawals still allowed given the recorded history
    pub fn remaining_withdrawals(&self, history: &History) -> u32 {
        let used = history.count_of(TransactionKind::Withdrawal);
        let used = u32::try_from(used).unwrap_or(u32::MAX);
        self.max_withdrawals.saturating_sub(used)
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self::new(
            Decimal::from(DEFAULT_WITHDRAWAL_LIMIT),
            DEFAULT_MAX_WITHDRAWALS,
        )
    }
}
