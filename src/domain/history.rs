//! Transaction history
//!
//! Append-only ledger of the transactions attempted against one account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TransactionKind;

/// One attempted transaction.
///
/// Records are written whether or not the transaction went through, so a
/// record proves an attempt, not a balance change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Ordered sequence of history records owned by a single account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record stamped with the current time.
    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) -> &HistoryRecord {
        self.records.push(HistoryRecord {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp: Utc::now(),
        });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of the given kind, failed attempts included.
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
