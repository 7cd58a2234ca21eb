//! Default data substituted when the store has nothing usable. Matches
//! the documented starter set: five transactions and two goals.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Category, Goal, Transaction};

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

fn amount(units: i64, cents: u32) -> Decimal {
    Decimal::new(units * 100 + cents as i64, 2)
}

pub(crate) fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".into(),
            description: "Grocery Store".into(),
            amount: amount(85, 50),
            date: jan(15),
            category: Category::Groceries,
        },
        Transaction {
            id: "2".into(),
            description: "Gas Station".into(),
            amount: amount(45, 0),
            date: jan(14),
            category: Category::Transportation,
        },
        Transaction {
            id: "3".into(),
            description: "Netflix Subscription".into(),
            amount: amount(15, 99),
            date: jan(13),
            category: Category::Entertainment,
        },
        Transaction {
            id: "4".into(),
            description: "Electric Bill".into(),
            amount: amount(120, 0),
            date: jan(12),
            category: Category::Utilities,
        },
        Transaction {
            id: "5".into(),
            description: "Coffee Shop".into(),
            amount: amount(4, 50),
            date: jan(11),
            category: Category::Dining,
        },
    ]
}

pub(crate) fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".into(),
            name: "Emergency Fund".into(),
            target_amount: Decimal::from(5000),
            saved_amount: Decimal::from(2800),
        },
        Goal {
            id: "2".into(),
            name: "Vacation Fund".into(),
            target_amount: Decimal::from(3000),
            saved_amount: Decimal::from(1200),
        },
    ]
}
