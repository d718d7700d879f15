use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::entry::{Entry, EntryKind};
use crate::models::ledger::{Ledger, LedgerRow};

/// Appends entry rows and reads them back per owner.
///
/// Pure business logic over an in-memory [`Ledger`] — no I/O. Easy to test.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new entry row. The only mutation path for entries.
    ///
    /// Rules:
    /// - Owner must be non-empty
    /// - Amount must be finite and not negative (the sign lives in `kind`)
    pub fn append_entry(
        &self,
        ledger: &mut Ledger,
        owner: &str,
        date: NaiveDate,
        kind: EntryKind,
        description: &str,
        amount: f64,
    ) -> Result<LedgerRow, CoreError> {
        Self::validate(owner, amount)?;

        let row = LedgerRow::new(owner, date, kind, description, amount);
        ledger.rows.push(row.clone());
        info!(owner, %date, %kind, amount, "entry appended");
        Ok(row)
    }

    /// Read every entry recorded by `owner`.
    ///
    /// Fails the whole read on the first row whose date or kind cannot be
    /// parsed. Callers never see a partial snapshot.
    pub fn fetch_entries(&self, ledger: &Ledger, owner: &str) -> Result<Vec<Entry>, CoreError> {
        let entries = ledger
            .rows_for(owner)
            .map(|row| {
                row.parse().inspect_err(|e| {
                    warn!(owner, row = %row.id, error = %e, "unreadable ledger row");
                })
            })
            .collect::<Result<Vec<Entry>, CoreError>>()?;

        debug!(owner, entries = entries.len(), "entries fetched");
        Ok(entries)
    }

    /// Entries for `owner`, newest first. Same-day entries keep append order.
    pub fn entries_newest_first(&self, ledger: &Ledger, owner: &str) -> Result<Vec<Entry>, CoreError> {
        let mut entries = self.fetch_entries(ledger, owner)?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    fn validate(owner: &str, amount: f64) -> Result<(), CoreError> {
        if owner.trim().is_empty() {
            return Err(CoreError::ValidationError("Entry owner must not be empty".into()));
        }
        if !amount.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Entry amount must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Entry amount must not be negative, got {amount}"
            )));
        }
        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
