//! Fixed configuration tables. Kept as named structures rather than
//! inline literals so tests can swap them out.

use rust_decimal::Decimal;

use super::categorize::KeywordRule;
use super::trend::HISTORY_MONTHS;
use crate::models::Category;

/// Monthly spending ceilings per category. `Other` is deliberately
/// absent and can never trigger an alert.
pub struct BudgetTable {
    entries: Vec<(Category, Decimal)>,
}

impl BudgetTable {
    pub fn new(entries: Vec<(Category, Decimal)>) -> Self {
        Self { entries }
    }

    /// The standard table: Groceries 300, Transportation 200,
    /// Utilities 150, Dining 150, Entertainment 100.
    pub fn standard() -> Self {
        Self::new(vec![
            (Category::Groceries, Decimal::from(300)),
            (Category::Transportation, Decimal::from(200)),
            (Category::Utilities, Decimal::from(150)),
            (Category::Dining, Decimal::from(150)),
            (Category::Entertainment, Decimal::from(100)),
        ])
    }

    /// Entries in declaration order. Alert output follows this order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.entries.iter().copied()
    }

    pub fn limit(&self, category: Category) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, limit)| *limit)
    }
}

/// The keyword table driving categorization, highest priority first.
pub fn keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            Category::Groceries,
            &["grocery", "food", "walmart", "supermarket"],
        ),
        KeywordRule::new(Category::Transportation, &["gas", "uber", "taxi", "transport"]),
        KeywordRule::new(Category::Utilities, &["electric", "water", "utility", "internet"]),
        KeywordRule::new(Category::Dining, &["restaurant", "coffee", "dining", "pizza"]),
        KeywordRule::new(
            Category::Entertainment,
            &["movie", "netflix", "game", "entertainment"],
        ),
    ]
}

/// Monthly spending totals for the five months preceding the current
/// one, feeding the trend forecast.
pub const SPENDING_HISTORY: [f64; HISTORY_MONTHS] = [850.0, 920.0, 780.0, 890.0, 950.0];
