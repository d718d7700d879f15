use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Income / expense / profit totals over a selection of entries.
///
/// Values are exact sums; rounding is a presentation concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all Income amounts
    pub income_total: f64,

    /// Sum of all Expense amounts
    pub expense_total: f64,

    /// income_total - expense_total (may be negative)
    pub profit: f64,
}

impl Summary {
    pub fn new(income_total: f64, expense_total: f64) -> Self {
        Self {
            income_total,
            expense_total,
            profit: income_total - expense_total,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.income_total == 0.0 && self.expense_total == 0.0
    }
}

/// Net result of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProfit {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    /// income - expense
    pub profit: f64,
}
