use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::EntryKind;

/// Total amount per entry kind (pie chart slice).
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindTotal {
    pub kind: EntryKind,
    pub total: f64,
}

/// Total amount per (date, kind) pair (income vs expense bar chart).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyKindTotal {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub total: f64,
}
