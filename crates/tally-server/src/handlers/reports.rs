//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use tally_core::models::{BudgetConfig, BudgetCurve, SpendingBreakdown};
use tally_core::ExpenseTracker;

#[derive(Debug, Deserialize)]
pub struct ReportSpendingQuery {
    /// Period preset (today, this-month, last-month)
    pub period: Option<String>,
    /// Whether to prepend the grand-total entry
    pub total: Option<bool>,
}

/// GET /api/reports/spending - Category totals for a period
pub async fn report_spending(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportSpendingQuery>,
) -> Result<Json<SpendingBreakdown>, AppError> {
    let include_total = params.total.unwrap_or(true);
    let tracker = ExpenseTracker::new(&state.db);

    let breakdown = match params.period.as_deref().unwrap_or("today") {
        "today" => tracker.today_breakdown(include_total),
        "this-month" => tracker.month_breakdown(include_total),
        "last-month" => tracker.previous_month_breakdown(include_total),
        other => {
            return Err(AppError::bad_request(&format!(
                "Unknown period: {}. Available: today, this-month, last-month",
                other
            )))
        }
    }
    .map_err(AppError::from_core)?;

    Ok(Json(breakdown))
}

#[derive(Debug, Deserialize)]
pub struct ReportBudgetQuery {
    /// Period preset (this-month, last-month)
    pub period: Option<String>,
    /// Daily budget override, smallest currency unit
    pub daily: Option<i64>,
    /// Monthly budget override, smallest currency unit
    pub monthly: Option<i64>,
}

/// Budget curve plus the axis bounds the chart collaborator needs
#[derive(Debug, Serialize)]
pub struct BudgetReport {
    pub planned: Vec<i64>,
    pub actual: Vec<i64>,
    pub day_axis: (i64, i64),
    pub value_axis: (i64, i64),
}

/// GET /api/reports/budget - Planned vs cumulative actual spend for a month
pub async fn report_budget(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportBudgetQuery>,
) -> Result<Json<BudgetReport>, AppError> {
    let defaults = BudgetConfig::default();
    let budget = BudgetConfig {
        daily: params.daily.unwrap_or(defaults.daily),
        monthly: params.monthly.unwrap_or(defaults.monthly),
    };
    let tracker = ExpenseTracker::new(&state.db);

    let curve = match params.period.as_deref().unwrap_or("this-month") {
        "this-month" => tracker.month_budget_curve(&budget),
        "last-month" => tracker.previous_month_budget_curve(&budget),
        other => {
            return Err(AppError::bad_request(&format!(
                "Unknown period: {}. Available: this-month, last-month",
                other
            )))
        }
    }
    .map_err(AppError::from_core)?;

    Ok(Json(BudgetReport {
        planned: curve.planned,
        actual: curve.actual,
        day_axis: BudgetCurve::day_axis(),
        value_axis: budget.value_axis(),
    }))
}
