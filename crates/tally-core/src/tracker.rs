//! Request-level expense operations
//!
//! Stateless composition of the message parser, category resolution, and the
//! store. Constructed around a borrowed database handle; every call is an
//! independent request with no shared mutable state.

use chrono::Utc;
use tracing::{error, info};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{BudgetConfig, BudgetCurve, Expense, NewExpense, SpendingBreakdown};
use crate::parser::parse_message;
use crate::period::{month_window, previous_month_window, today_window};

/// Shown when the store rejects an expense record
const SAVE_FAILED_MSG: &str = "Не удалось сохранить расход";

pub struct ExpenseTracker<'a> {
    db: &'a Database,
}

impl<'a> ExpenseTracker<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Log one expense from raw message text: parse, resolve the category,
    /// insert.
    ///
    /// Store rejections (validation or connectivity alike) are logged and
    /// surfaced as [`Error::InvalidMessage`]; callers needing to tell the two
    /// apart must wrap the store instead.
    pub fn add(&self, text: &str) -> Result<Expense> {
        let parsed = parse_message(text)?;
        let category = self.db.resolve_category(&parsed.category_text)?;

        let expense = self
            .db
            .insert_expense(&NewExpense {
                date: None,
                category_id: category.id,
                amount: parsed.amount,
                raw_text: text.to_string(),
            })
            .map_err(|e| {
                error!(error = %e, "Failed to store expense");
                Error::InvalidMessage(SAVE_FAILED_MSG.to_string())
            })?;

        info!(
            id = %expense.id,
            amount = expense.amount,
            category = %expense.category_id,
            "Expense recorded"
        );
        Ok(expense)
    }

    /// Best-effort delete; a missing id is not an error
    pub fn delete(&self, id: &str) -> Result<()> {
        self.db.delete_expense(id)
    }

    pub fn today_breakdown(&self, include_total: bool) -> Result<SpendingBreakdown> {
        let (from, to) = today_window(Utc::now().date_naive());
        self.db.spending_by_category(from, to, include_total)
    }

    pub fn month_breakdown(&self, include_total: bool) -> Result<SpendingBreakdown> {
        let (from, to) = month_window(Utc::now().date_naive());
        self.db.spending_by_category(from, to, include_total)
    }

    pub fn previous_month_breakdown(&self, include_total: bool) -> Result<SpendingBreakdown> {
        let (from, to) = previous_month_window(Utc::now().date_naive());
        self.db.spending_by_category(from, to, include_total)
    }

    pub fn month_budget_curve(&self, budget: &BudgetConfig) -> Result<BudgetCurve> {
        let (from, to) = month_window(Utc::now().date_naive());
        self.db.budget_curve(from, to, budget)
    }

    pub fn previous_month_budget_curve(&self, budget: &BudgetConfig) -> Result<BudgetCurve> {
        let (from, to) = previous_month_window(Utc::now().date_naive());
        self.db.budget_curve(from, to, budget)
    }
}
