use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A single recorded expense. Immutable once created; the category is
/// whatever the categorizer assigned for the description at entry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: Category,
}

impl Transaction {
    pub fn new(description: String, amount: Decimal, date: NaiveDate, category: Category) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            amount,
            date,
            category,
        }
    }

    /// True when this transaction falls in the same calendar month and
    /// year as `reference`.
    pub fn in_month(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}
