use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings target. `saved_amount` is typically at or below
/// `target_amount` but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
}

impl Goal {
    pub fn new(name: String, target_amount: Decimal, saved_amount: Decimal) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            target_amount,
            saved_amount,
        }
    }
}
