//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Message parsing for informal text entries ("1500 дом")
//! - Category resolution against a seeded alias table
//! - SQLite-backed expense store with windowed range scans
//! - Spending aggregation and budget-projection curves

pub mod db;
pub mod error;
pub mod models;
pub mod parser;
pub mod period;
pub mod tracker;

pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    BreakdownEntry, BudgetConfig, BudgetCurve, Category, Expense, NewExpense, SpendingBreakdown,
};
pub use parser::{parse_message, ParsedMessage};
pub use tracker::ExpenseTracker;
