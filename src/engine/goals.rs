use rust_decimal::prelude::ToPrimitive;

use crate::models::Goal;

/// Completion percentage for a savings goal: 100 × saved / target in
/// f64. The division is not guarded; a zero target yields infinity (or
/// NaN for 0/0) under IEEE rules.
pub fn progress(goal: &Goal) -> f64 {
    let saved = goal.saved_amount.to_f64().unwrap_or(0.0);
    let target = goal.target_amount.to_f64().unwrap_or(0.0);
    100.0 * saved / target
}
