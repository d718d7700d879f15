use crate::models::entry::{Entry, EntryKind};
use crate::models::summary::Summary;

/// Totals income, expense and profit over any selection of entries.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Sum amounts per kind. No rounding; an empty selection is all zeros.
    pub fn summarize<'a, I>(&self, entries: I) -> Summary
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let (income, expense) = entries
            .into_iter()
            .fold((0.0, 0.0), |(income, expense), e| match e.kind {
                EntryKind::Income => (income + e.amount, expense),
                EntryKind::Expense => (income, expense + e.amount),
            });
        Summary::new(income, expense)
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
