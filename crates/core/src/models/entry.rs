use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Whether an entry brings money in or takes it out.
///
/// The sign of a ledger amount lives here, never in `Entry::amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Canonical label used in storage and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = CoreError;

    /// Accepts the canonical labels case-insensitively; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            _ => Err(CoreError::ValidationError(format!(
                "Unknown entry kind '{s}': expected Income or Expense"
            ))),
        }
    }
}

/// A single parsed ledger record.
///
/// Entries are immutable once appended. They are produced by a ledger store
/// read and handed to the aggregation services as an unordered snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Row identifier assigned on append
    pub id: Uuid,

    /// User who recorded the entry
    pub owner: String,

    /// Calendar date (no time component); drives all grouping
    pub date: NaiveDate,

    /// Income or Expense
    pub kind: EntryKind,

    /// Free-text label, may be empty
    pub description: String,

    /// Non-negative amount in the ledger's single implicit unit
    pub amount: f64,
}

impl Entry {
    pub fn new(
        owner: impl Into<String>,
        date: NaiveDate,
        kind: EntryKind,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            date,
            kind,
            description: description.into(),
            amount,
        }
    }

    pub fn income(
        owner: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(owner, date, EntryKind::Income, description, amount)
    }

    pub fn expense(
        owner: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(owner, date, EntryKind::Expense, description, amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}
