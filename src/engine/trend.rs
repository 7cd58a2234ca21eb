use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;

/// Months of history feeding the projection.
pub const HISTORY_MONTHS: usize = 5;
/// Months projected forward.
pub const FORECAST_MONTHS: usize = 3;

/// Fixed growth schedule applied to the historical mean, one factor per
/// projected month. Not a statistical fit.
const GROWTH_SCHEDULE: [f64; FORECAST_MONTHS] = [1.05, 1.08, 1.12];

/// Numeric series for the spending trend chart: five months of history
/// plus the current running total, then the three projected months.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub actual: [f64; HISTORY_MONTHS + 1],
    pub projected: [f64; FORECAST_MONTHS],
}

/// Project the next three months from the mean of the five prior ones.
/// The current month does not participate in the mean.
pub fn forecast(past_totals: &[f64; HISTORY_MONTHS]) -> [f64; FORECAST_MONTHS] {
    let average = past_totals.iter().sum::<f64>() / HISTORY_MONTHS as f64;
    GROWTH_SCHEDULE.map(|factor| average * factor)
}

/// Sum of every transaction on record, regardless of date. The trend
/// chart treats this as the current month's spend even when entries
/// predate the current month.
pub fn running_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|t| t.amount)
        .sum::<Decimal>()
        .to_f64()
        .unwrap_or(0.0)
}

pub fn trend_series(
    past_totals: &[f64; HISTORY_MONTHS],
    current_month_total: f64,
) -> TrendSeries {
    let mut actual = [0.0; HISTORY_MONTHS + 1];
    actual[..HISTORY_MONTHS].copy_from_slice(past_totals);
    actual[HISTORY_MONTHS] = current_month_total;

    TrendSeries {
        actual,
        projected: forecast(past_totals),
    }
}
