#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::store::Store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 20)
}

// ── Loading ───────────────────────────────────────────────────

#[test]
fn test_empty_store_falls_back_to_samples() {
    let store = Store::open_in_memory().unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();

    assert_eq!(ledger.transactions().len(), 5);
    assert_eq!(ledger.transactions()[0].description, "Grocery Store");
    assert_eq!(ledger.goals().len(), 2);
    assert_eq!(ledger.goals()[0].name, "Emergency Fund");
}

#[test]
fn test_samples_are_not_written_back_on_load() {
    let store = Store::open_in_memory().unwrap();
    let _ledger = Ledger::load(&store, today()).unwrap();
    // Load-time substitution only; the store stays empty until a
    // real mutation.
    assert!(store.load_transactions().unwrap().is_none());
    assert!(store.load_goals().unwrap().is_none());
}

#[test]
fn test_stored_collections_take_precedence() {
    let store = Store::open_in_memory().unwrap();
    let txns = vec![Transaction::new(
        "Water Bill".into(),
        dec!(60),
        date(2024, 1, 2),
        Category::Utilities,
    )];
    store.save_transactions(&txns).unwrap();
    store.save_goals(&[]).unwrap();

    let ledger = Ledger::load(&store, today()).unwrap();
    assert_eq!(ledger.transactions(), txns.as_slice());
    assert!(ledger.goals().is_empty());
}

#[test]
fn test_malformed_store_falls_back_to_samples() {
    let store = Store::open_in_memory().unwrap();
    store.save(crate::store::TRANSACTIONS_KEY, "garbage").unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();
    assert_eq!(ledger.transactions().len(), 5);
}

// ── Mutation ──────────────────────────────────────────────────

#[test]
fn test_add_transaction_categorizes_and_persists() {
    let store = Store::open_in_memory().unwrap();
    let mut ledger = Ledger::load(&store, today()).unwrap();

    let txn = ledger
        .add_transaction(&store, "Uber to airport", dec!(32.50), date(2024, 1, 19), today())
        .unwrap();
    assert_eq!(txn.category, Category::Transportation);

    // Newest first
    assert_eq!(ledger.transactions()[0].description, "Uber to airport");

    // The whole collection (samples included) is now persisted
    let stored = store.load_transactions().unwrap().unwrap();
    assert_eq!(stored.len(), 6);
    assert_eq!(stored[0].description, "Uber to airport");
}

#[test]
fn test_add_transaction_refreshes_alerts() {
    let store = Store::open_in_memory().unwrap();
    let mut ledger = Ledger::load(&store, today()).unwrap();
    // Sample Groceries spend this month is 85.50; push it past 300.
    assert!(ledger.alerts().is_empty());

    ledger
        .add_transaction(&store, "Supermarket run", dec!(250), date(2024, 1, 18), today())
        .unwrap();

    let alerts = ledger.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].category, Category::Groceries);
    assert_eq!(alerts[0].exceeded, dec!(35.50));
}

#[test]
fn test_add_goal_persists() {
    let store = Store::open_in_memory().unwrap();
    let mut ledger = Ledger::load(&store, today()).unwrap();

    ledger.add_goal(&store, "New Laptop", dec!(2000), dec!(150)).unwrap();
    assert_eq!(ledger.goals().len(), 3);

    let stored = store.load_goals().unwrap().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].name, "New Laptop");
}

// ── Series ────────────────────────────────────────────────────

#[test]
fn test_spending_by_category_covers_all_months() {
    let store = Store::open_in_memory().unwrap();
    let txns = vec![
        Transaction::new("Grocery Store".into(), dec!(50), date(2024, 1, 5), Category::Groceries),
        Transaction::new("Old Grocery".into(), dec!(30), date(2023, 11, 5), Category::Groceries),
        Transaction::new("Coffee Shop".into(), dec!(4.50), date(2024, 1, 6), Category::Dining),
    ];
    store.save_transactions(&txns).unwrap();
    store.save_goals(&[]).unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();

    let spending = ledger.spending_by_category();
    assert_eq!(
        spending,
        vec![
            (Category::Groceries, dec!(80)),
            (Category::Dining, dec!(4.50)),
        ]
    );
}

#[test]
fn test_monthly_spending_filters_by_month() {
    let store = Store::open_in_memory().unwrap();
    let txns = vec![
        Transaction::new("Grocery Store".into(), dec!(50), date(2024, 1, 5), Category::Groceries),
        Transaction::new("Old Grocery".into(), dec!(30), date(2023, 11, 5), Category::Groceries),
    ];
    store.save_transactions(&txns).unwrap();
    store.save_goals(&[]).unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();

    let monthly = ledger.monthly_spending(today());
    assert_eq!(monthly, vec![(Category::Groceries, dec!(50))]);
}

#[test]
fn test_trend_uses_running_total() {
    let store = Store::open_in_memory().unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();

    // Sample data sums to 270.99 across all dates.
    let series = ledger.trend();
    assert!((series.actual[5] - 270.99).abs() < 1e-9);
    assert_eq!(series.actual[0], 850.0);
    assert_eq!(series.projected.len(), 3);
}

// ── Export ────────────────────────────────────────────────────

#[test]
fn test_export_csv() {
    let store = Store::open_in_memory().unwrap();
    let ledger = Ledger::load(&store, today()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    let count = ledger.export_csv(&path.display().to_string()).unwrap();
    assert_eq!(count, 5);

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "id,date,description,category,amount");
    assert!(contents.contains("Grocery Store,Groceries,85.50"));
    assert_eq!(contents.lines().count(), 6);
}
