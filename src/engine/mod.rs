//! The finance analysis engine: pure functions over the transaction and
//! goal collections. Nothing here mutates or retains state between calls;
//! callers re-invoke after every mutation.

mod budget;
mod categorize;
pub mod config;
mod goals;
mod trend;

pub use budget::compute_alerts;
pub use categorize::{Categorizer, KeywordRule};
pub use config::BudgetTable;
pub use goals::progress;
pub use trend::{forecast, running_total, trend_series, TrendSeries, FORECAST_MONTHS, HISTORY_MONTHS};

#[cfg(test)]
mod tests;
