use std::collections::BTreeMap;

use tracing::debug;

use crate::models::entry::{Entry, EntryKind};
use crate::models::month::MonthKey;
use crate::models::summary::MonthlyProfit;

/// Builds the month-by-month profit series over a user's whole history.
pub struct ProfitService;

impl ProfitService {
    pub fn new() -> Self {
        Self
    }

    /// Pivot all entries into per-month income/expense totals, then
    /// profit = income - expense.
    ///
    /// Output is ordered by month ascending. Only months that have at least
    /// one entry appear; calendar gaps between them are not filled.
    pub fn monthly_profit(&self, entries: &[Entry]) -> Vec<MonthlyProfit> {
        // month → (income, expense)
        let mut pivot: BTreeMap<MonthKey, (f64, f64)> = BTreeMap::new();

        for entry in entries {
            let totals = pivot.entry(MonthKey::from_date(entry.date)).or_insert((0.0, 0.0));
            match entry.kind {
                EntryKind::Income => totals.0 += entry.amount,
                EntryKind::Expense => totals.1 += entry.amount,
            }
        }

        debug!(entries = entries.len(), months = pivot.len(), "monthly profit pivot built");

        pivot
            .into_iter()
            .map(|(month, (income, expense))| MonthlyProfit {
                month,
                income,
                expense,
                profit: income - expense,
            })
            .collect()
    }
}

impl Default for ProfitService {
    fn default() -> Self {
        Self::new()
    }
}
