use serde::{Deserialize, Serialize};

use super::chart::{DailyKindTotal, KindTotal};
use super::entry::Entry;
use super::forecast::DailyExpensePoint;
use super::month::MonthKey;
use super::summary::{MonthlyProfit, Summary};

/// Everything a dashboard page needs for one user and one selected month.
///
/// Month-scoped fields (`entries`, `summary`, `kind_breakdown`,
/// `daily_totals`) cover `selected_month` only. `monthly_profit` and
/// `forecast` always cover the user's full history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Distinct months with at least one entry, chronological
    pub months: Vec<MonthKey>,

    /// Month the filtered views were computed for
    pub selected_month: MonthKey,

    /// Entries dated inside `selected_month`
    pub entries: Vec<Entry>,

    /// Totals for `entries`
    pub summary: Summary,

    /// Per-kind totals for `entries`
    pub kind_breakdown: Vec<KindTotal>,

    /// Per-day, per-kind totals for `entries`
    pub daily_totals: Vec<DailyKindTotal>,

    /// Profit per month across all history
    pub monthly_profit: Vec<MonthlyProfit>,

    /// Gap-filled daily expenses with trailing average, all history
    pub forecast: Vec<DailyExpensePoint>,
}
