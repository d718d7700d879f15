use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::entry::Entry;
use crate::models::month::MonthKey;

/// Splits a user's entries into calendar months.
pub struct MonthService;

impl MonthService {
    pub fn new() -> Self {
        Self
    }

    /// Distinct months present in `entries`, oldest first, no duplicates.
    /// Empty input gives an empty list.
    pub fn available_months(&self, entries: &[Entry]) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = entries.iter().map(|e| MonthKey::from_date(e.date)).collect();
        debug!(entries = entries.len(), months = months.len(), "months partitioned");
        months.into_iter().collect()
    }

    /// Entries dated inside `month`, in input order.
    /// A month with no entries yields an empty list, not an error.
    pub fn entries_for_month<'a>(&self, entries: &'a [Entry], month: MonthKey) -> Vec<&'a Entry> {
        entries.iter().filter(|e| month.contains(e.date)).collect()
    }

    /// Every entry grouped under its month. Each entry appears exactly once.
    pub fn partition<'a>(&self, entries: &'a [Entry]) -> BTreeMap<MonthKey, Vec<&'a Entry>> {
        let mut by_month: BTreeMap<MonthKey, Vec<&Entry>> = BTreeMap::new();
        for entry in entries {
            by_month.entry(MonthKey::from_date(entry.date)).or_default().push(entry);
        }
        by_month
    }
}

impl Default for MonthService {
    fn default() -> Self {
        Self::new()
    }
}
