//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::models::Expense;
use tally_core::ExpenseTracker;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    /// Raw entry text, e.g. "1500 дом"
    pub text: String,
}

/// POST /api/expenses - Log one expense from raw message text
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let expense = ExpenseTracker::new(&state.db)
        .add(&req.text)
        .map_err(AppError::from_core)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    /// Window start (YYYY-MM-DD, inclusive)
    pub from: String,
    /// Window end (YYYY-MM-DD, exclusive)
    pub to: String,
}

/// GET /api/expenses - Expenses in a half-open date window
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListExpensesQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let from = parse_date(&params.from, "from")?;
    let to = parse_date(&params.to, "to")?;

    let expenses = state
        .db
        .expenses_in_range(from, to)
        .map_err(AppError::from_core)?;
    Ok(Json(expenses))
}

/// DELETE /api/expenses/:id - Best-effort delete; a missing id still succeeds
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    ExpenseTracker::new(&state.db)
        .delete(&id)
        .map_err(AppError::from_core)?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_date(value: &str, param: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::bad_request(&format!("Invalid {} date format (use YYYY-MM-DD)", param))
    })
}
