use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::entry::Entry;
use crate::models::forecast::DailyExpensePoint;

/// Number of daily samples in the trailing moving average.
pub const ROLLING_WINDOW_DAYS: usize = 7;

/// Builds the daily expense series used for the spending forecast.
///
/// The series is gap-filled: every calendar day between the first and last
/// expense appears once, with 0 on days nothing was spent. A trailing
/// moving average over a sparse index would be meaningless otherwise.
pub struct ForecastService;

impl ForecastService {
    pub fn new() -> Self {
        Self
    }

    /// Daily expense totals from the earliest to the latest expense date
    /// (inclusive) with a trailing [`ROLLING_WINDOW_DAYS`]-day average.
    ///
    /// Returns an empty series when there are no expenses. The first
    /// `ROLLING_WINDOW_DAYS - 1` points have no average.
    pub fn expense_series(&self, entries: &[Entry]) -> Vec<DailyExpensePoint> {
        let daily = Self::daily_expense_totals(entries);

        let (Some(&first), Some(&last)) = (daily.keys().next(), daily.keys().next_back()) else {
            return Vec::new();
        };

        let amounts = Self::gap_fill(&daily, first, last);
        let averages = Self::trailing_average(&amounts, ROLLING_WINDOW_DAYS);

        debug!(
            expense_days = daily.len(),
            span_days = amounts.len(),
            %first,
            %last,
            "expense series built"
        );

        first
            .iter_days()
            .zip(amounts)
            .zip(averages)
            .map(|((date, amount), rolling_average)| DailyExpensePoint {
                date,
                amount,
                rolling_average,
            })
            .collect()
    }

    /// The most recent defined moving average, if the span is long enough.
    pub fn latest_average(&self, series: &[DailyExpensePoint]) -> Option<f64> {
        series.last().and_then(|p| p.rolling_average)
    }

    /// Expense amounts summed per exact date.
    fn daily_expense_totals(entries: &[Entry]) -> BTreeMap<NaiveDate, f64> {
        let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for entry in entries.iter().filter(|e| e.is_expense()) {
            *daily.entry(entry.date).or_insert(0.0) += entry.amount;
        }
        daily
    }

    /// One amount per calendar day in `first..=last`, 0 where nothing was recorded.
    fn gap_fill(daily: &BTreeMap<NaiveDate, f64>, first: NaiveDate, last: NaiveDate) -> Vec<f64> {
        let mut amounts = Vec::new();
        let mut current_date = first;

        while current_date <= last {
            amounts.push(daily.get(&current_date).copied().unwrap_or(0.0));

            current_date = match current_date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        amounts
    }

    /// Mean of each full trailing window; `None` until `window` samples exist.
    fn trailing_average(amounts: &[f64], window: usize) -> Vec<Option<f64>> {
        let warmup = (window - 1).min(amounts.len());
        let mut averages: Vec<Option<f64>> = vec![None; warmup];
        averages.extend(
            amounts
                .windows(window)
                .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
        );
        averages
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}
