use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::entry::{Entry, EntryKind};
use crate::models::ledger::Ledger;
use crate::services::auth_service::AuthService;
use crate::services::ledger_service::LedgerService;

/// Read/append access to the entry ledger, scoped by owner.
///
/// The aggregation services only ever see the `Vec<Entry>` snapshot a
/// `fetch_entries` call returns; they never call back into the store.
pub trait LedgerStore {
    /// All entries recorded by `owner`, in no guaranteed order.
    /// A single unreadable row fails the whole call.
    fn fetch_entries(&self, owner: &str) -> Result<Vec<Entry>, CoreError>;

    /// Append one entry. The only mutation path.
    fn append_entry(
        &mut self,
        owner: &str,
        date: NaiveDate,
        kind: EntryKind,
        description: &str,
        amount: f64,
    ) -> Result<(), CoreError>;
}

/// Username → secret gate in front of the ledger.
pub trait CredentialStore {
    /// Fails with `CoreError::UserAlreadyExists` for a taken username.
    fn register_user(&mut self, username: &str, secret: &str) -> Result<(), CoreError>;

    fn authenticate(&self, username: &str, secret: &str) -> Result<bool, CoreError>;
}

impl LedgerStore for Ledger {
    fn fetch_entries(&self, owner: &str) -> Result<Vec<Entry>, CoreError> {
        LedgerService::new().fetch_entries(self, owner)
    }

    fn append_entry(
        &mut self,
        owner: &str,
        date: NaiveDate,
        kind: EntryKind,
        description: &str,
        amount: f64,
    ) -> Result<(), CoreError> {
        LedgerService::new()
            .append_entry(self, owner, date, kind, description, amount)
            .map(|_| ())
    }
}

impl CredentialStore for Ledger {
    fn register_user(&mut self, username: &str, secret: &str) -> Result<(), CoreError> {
        AuthService::new().register_user(self, username, secret)
    }

    fn authenticate(&self, username: &str, secret: &str) -> Result<bool, CoreError> {
        AuthService::new().authenticate(self, username, secret)
    }
}
