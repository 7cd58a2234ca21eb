use rust_decimal::Decimal;

use super::Category;

/// Derived record for a category whose current-month spend passed its
/// budget. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    pub category: Category,
    pub budget: Decimal,
    pub exceeded: Decimal,
}

impl BudgetAlert {
    /// Total spent in the category this month (budget + overshoot).
    pub fn spent(&self) -> Decimal {
        self.budget + self.exceeded
    }
}
