//! Integration tests for tally-core
//!
//! These tests exercise the full add → aggregate → budget-curve workflow.

use tally_core::{BudgetConfig, Database, Error, ExpenseTracker};

fn setup_db() -> Database {
    let db = Database::in_memory().expect("Failed to create test database");
    db.seed_default_categories()
        .expect("Failed to seed categories");
    db
}

#[test]
fn test_add_and_today_breakdown() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    tracker.add("1500 дом").unwrap();
    tracker.add("1 500 дом").unwrap();
    tracker.add("200 кофе").unwrap();
    tracker.add("50 coffee").unwrap();

    let breakdown = tracker.today_breakdown(true).unwrap();
    let labels: Vec<&str> = breakdown
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();

    // Grand total first, then categories descending by spend
    assert_eq!(labels, ["Всего", "Дом, покупки", "Кофе"]);
    assert_eq!(breakdown.entries[0].total, 3250);
    assert_eq!(breakdown.entries[1].total, 3000);
    assert_eq!(breakdown.entries[2].total, 250);

    assert_eq!(
        breakdown.to_text(),
        "Всего: 3250\nДом, покупки: 3000\nКофе: 250"
    );
}

#[test]
fn test_add_rejects_malformed_text() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    match tracker.add("дом 1500") {
        Err(Error::InvalidMessage(msg)) => assert!(msg.contains("1500 дом")),
        other => panic!("Expected InvalidMessage, got {:?}", other),
    }
}

#[test]
fn test_add_rejects_unknown_category() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    match tracker.add("100 unknown-xyz") {
        Err(Error::InvalidCategory(_)) => {}
        other => panic!("Expected InvalidCategory, got {:?}", other),
    }
}

#[test]
fn test_add_rejects_zero_amount_at_the_store() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    // The parser accepts a zero amount; the store's positivity check rejects
    // it, and the rejection surfaces with the user-facing save-failure text.
    match tracker.add("0 дом") {
        Err(Error::InvalidMessage(msg)) => assert_eq!(msg, "Не удалось сохранить расход"),
        other => panic!("Expected InvalidMessage, got {:?}", other),
    }
}

#[test]
fn test_delete_removes_expense() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    let expense = tracker.add("300 такси").unwrap();
    tracker.delete(&expense.id).unwrap();

    let breakdown = tracker.today_breakdown(false).unwrap();
    assert!(breakdown.is_empty());

    // Deleting the same id again is still fine
    tracker.delete(&expense.id).unwrap();
}

#[test]
fn test_month_budget_curve() {
    let db = setup_db();
    let tracker = ExpenseTracker::new(&db);

    tracker.add("1500 дом").unwrap();
    tracker.add("500 кофе").unwrap();

    let curve = tracker.month_budget_curve(&BudgetConfig::default()).unwrap();
    assert_eq!(curve.planned.len(), 32);
    assert_eq!(curve.actual.len(), 32);
    assert_eq!(curve.planned[31], 31 * 1000);
    assert_eq!(curve.actual[31], 2000);

    for d in 1..curve.actual.len() {
        assert!(curve.actual[d] >= curve.actual[d - 1]);
    }
}

#[test]
fn test_expenses_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");
    let path = path.to_str().unwrap();

    let expense = {
        let db = Database::new(path).unwrap();
        db.seed_default_categories().unwrap();
        ExpenseTracker::new(&db).add("1500 дом").unwrap()
    };

    let db = Database::new(path).unwrap();
    let breakdown = ExpenseTracker::new(&db).today_breakdown(true).unwrap();
    assert_eq!(breakdown.entries[0].total, expense.amount);
}
