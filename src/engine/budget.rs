use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::config::BudgetTable;
use crate::models::{BudgetAlert, Transaction};

/// Compute overspend alerts for the calendar month containing
/// `reference`. Only transactions in that month and year count; a
/// category alerts only when spend is strictly greater than its budget.
/// Output order follows the budget table.
pub fn compute_alerts(
    transactions: &[Transaction],
    budgets: &BudgetTable,
    reference: NaiveDate,
) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter_map(|(category, budget)| {
            let spent: Decimal = transactions
                .iter()
                .filter(|t| t.category == category && t.in_month(reference))
                .map(|t| t.amount)
                .sum();

            (spent > budget).then(|| BudgetAlert {
                category,
                budget,
                exceeded: spent - budget,
            })
        })
        .collect()
}
