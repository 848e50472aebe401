//! Expense insert/delete and range scans

use chrono::{NaiveDate, Utc};
use rusqlite::params;
use uuid::Uuid;

use super::{day_start, format_datetime, parse_datetime, Database};
use crate::error::Result;
use crate::models::{Expense, NewExpense};

fn expense_from_row(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: parse_datetime(&row.get::<_, String>(1)?),
        category_id: row.get(2)?,
        amount: row.get(3)?,
        raw_text: row.get(4)?,
    })
}

impl Database {
    /// Insert an expense, generating its id and defaulting the date to now.
    ///
    /// The store enforces `amount > 0` and that `category_id` references a
    /// seeded category; violations surface as database errors.
    pub fn insert_expense(&self, new: &NewExpense) -> Result<Expense> {
        let conn = self.conn()?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            date: new.date.unwrap_or_else(Utc::now),
            category_id: new.category_id.clone(),
            amount: new.amount,
            raw_text: new.raw_text.clone(),
        };

        conn.execute(
            r#"
            INSERT INTO expenses (id, date, category_id, amount, raw_text)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                expense.id,
                format_datetime(expense.date),
                expense.category_id,
                expense.amount,
                expense.raw_text,
            ],
        )?;

        Ok(expense)
    }

    /// Delete an expense by id. Best-effort: a missing id is not an error.
    pub fn delete_expense(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        Ok(())
    }

    /// Expenses with `from <= date < to` (half-open window), oldest first
    pub fn expenses_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, category_id, amount, raw_text
            FROM expenses
            WHERE date >= ?1 AND date < ?2
            ORDER BY date
            "#,
        )?;
        let rows = stmt.query_map(params![day_start(from), day_start(to)], expense_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }
}
