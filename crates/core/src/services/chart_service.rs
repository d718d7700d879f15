use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::chart::{DailyKindTotal, KindTotal};
use crate::models::entry::{Entry, EntryKind};

/// Generates chart-ready data sets from a selection of entries.
///
/// The core computes all the numbers — the frontend only renders.
/// Chart data includes:
/// - Income/expense split of the selection (pie)
/// - Per-day income and expense totals (grouped bars)
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One total per kind present in the selection, Income before Expense.
    /// Kinds with no entries are left out.
    pub fn kind_breakdown<'a, I>(&self, entries: I) -> Vec<KindTotal>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut totals: BTreeMap<EntryKind, f64> = BTreeMap::new();
        for entry in entries {
            *totals.entry(entry.kind).or_insert(0.0) += entry.amount;
        }
        totals
            .into_iter()
            .map(|(kind, total)| KindTotal { kind, total })
            .collect()
    }

    /// One total per (date, kind) pair present, sorted by date then kind.
    /// Days without entries are not filled in.
    pub fn daily_kind_totals<'a, I>(&self, entries: I) -> Vec<DailyKindTotal>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut totals: BTreeMap<(NaiveDate, EntryKind), f64> = BTreeMap::new();
        for entry in entries {
            *totals.entry((entry.date, entry.kind)).or_insert(0.0) += entry.amount;
        }
        totals
            .into_iter()
            .map(|((date, kind), total)| DailyKindTotal { date, kind, total })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
