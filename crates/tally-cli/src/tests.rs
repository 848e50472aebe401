//! CLI command tests

use tally_core::{Database, ExpenseTracker};

use crate::commands;

fn setup_test_db() -> Database {
    let db = Database::in_memory().unwrap();
    db.seed_default_categories().unwrap();
    db
}

// ========== Entry Command Tests ==========

#[test]
fn test_cmd_add_records_expense() {
    let db = setup_test_db();
    commands::cmd_add(&db, "1500 дом").unwrap();

    let breakdown = ExpenseTracker::new(&db).today_breakdown(true).unwrap();
    assert_eq!(breakdown.entries[0].total, 1500);
}

#[test]
fn test_cmd_add_rejects_bad_text() {
    let db = setup_test_db();
    assert!(commands::cmd_add(&db, "не расход").is_err());
}

#[test]
fn test_cmd_add_rejects_unknown_category() {
    let db = setup_test_db();
    assert!(commands::cmd_add(&db, "100 unknown-xyz").is_err());
}

#[test]
fn test_cmd_delete_is_best_effort() {
    let db = setup_test_db();
    assert!(commands::cmd_delete(&db, "no-such-id").is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_report_commands_run() {
    let db = setup_test_db();
    commands::cmd_add(&db, "300 такси").unwrap();

    assert!(commands::cmd_today(&db, true).is_ok());
    assert!(commands::cmd_month(&db, false, true).is_ok());
    assert!(commands::cmd_month(&db, true, false).is_ok());
    assert!(commands::cmd_budget(&db, false, None, Some(20000)).is_ok());
    assert!(commands::cmd_categories(&db).is_ok());
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_seeds_categories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");

    commands::cmd_init(&path).unwrap();

    // Running init again is idempotent
    commands::cmd_init(&path).unwrap();

    let db = commands::open_db(&path).unwrap();
    assert_eq!(db.list_categories().unwrap().len(), 10);
}
