//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database and seed categories
//! - `cmd_add` / `cmd_delete` - Expense entry commands
//! - `cmd_categories` - List seeded categories

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{Database, ExpenseTracker};

/// Open the database at the given path, running migrations
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    db.seed_default_categories()
        .context("Failed to seed categories")?;
    println!("   Seeded default categories");

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Log an expense: tally add 1500 дом");
    println!("  2. Check the month: tally month");

    Ok(())
}

pub fn cmd_add(db: &Database, text: &str) -> Result<()> {
    let expense = ExpenseTracker::new(db).add(text)?;

    let categories = db.lookup_categories_by_ids(std::slice::from_ref(&expense.category_id))?;
    let name = categories
        .get(&expense.category_id)
        .map(|category| category.name.as_str())
        .unwrap_or(expense.category_id.as_str());

    println!("✅ Recorded {} in {}", expense.amount, name);
    println!("   id: {}", expense.id);

    Ok(())
}

pub fn cmd_delete(db: &Database, id: &str) -> Result<()> {
    ExpenseTracker::new(db).delete(id)?;
    println!("✅ Deleted expense {} (no-op if it did not exist)", id);
    Ok(())
}

pub fn cmd_categories(db: &Database) -> Result<()> {
    let categories = db.list_categories()?;

    println!();
    println!("📁 Categories ({})", categories.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for category in &categories {
        // base-expense categories are marked as essential spending
        let marker = if category.is_base_expenses { "●" } else { "○" };
        println!(
            "   {} {:12} {:30} {}",
            marker,
            category.id,
            category.name,
            category.aliases.join(", ")
        );
    }

    Ok(())
}
