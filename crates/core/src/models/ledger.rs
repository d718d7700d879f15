use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::CoreError;

use super::entry::{Entry, EntryKind};
use super::settings::Settings;
use super::user::UserCredential;

/// Storage format for entry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted ledger row, kept in its stored (textual) shape.
///
/// Dates and kinds are text so that rows written by older or foreign tools
/// survive a load unchanged; they are parsed into an [`Entry`] on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub id: Uuid,
    pub owner: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `Income` or `Expense`
    pub kind: String,
    pub description: String,
    pub amount: f64,
}

impl LedgerRow {
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
            date: date.format(DATE_FORMAT).to_string(),
            kind: kind.as_str().to_string(),
            description: description.into(),
            amount,
        }
    }

    /// Parse the stored fields into a typed entry.
    ///
    /// The amount must be finite and not negative, whatever path the row
    /// arrived by.
    pub fn parse(&self) -> Result<Entry, CoreError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            CoreError::MalformedDate {
                row: self.id.to_string(),
                value: self.date.clone(),
            }
        })?;
        let kind = self
            .kind
            .parse::<EntryKind>()
            .map_err(|_| CoreError::MalformedKind {
                row: self.id.to_string(),
                value: self.kind.clone(),
            })?;
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CoreError::MalformedAmount {
                row: self.id.to_string(),
                value: self.amount.to_string(),
            });
        }

        Ok(Entry {
            id: self.id,
            owner: self.owner.clone(),
            date,
            kind,
            description: self.description.clone(),
            amount: self.amount,
        })
    }
}

/// The main data container. Everything in here gets serialized,
/// encrypted, and saved to the portable ledger file.
///
/// Contains: entry rows for every user, the credential table, and settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// All entry rows, in append order
    pub rows: Vec<LedgerRow>,

    /// username → salted credential
    pub users: HashMap<String, UserCredential>,

    /// Display and hashing settings
    pub settings: Settings,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows recorded by `owner`, in append order.
    pub fn rows_for<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a LedgerRow> + 'a {
        self.rows.iter().filter(move |r| r.owner == owner)
    }
}
