use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the gap-filled expense series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyExpensePoint {
    pub date: NaiveDate,

    /// Total expense recorded on this date (0 for gap-filled days)
    pub amount: f64,

    /// Trailing moving average ending on this date.
    /// `None` until a full window of samples is available.
    pub rolling_average: Option<f64>,
}
