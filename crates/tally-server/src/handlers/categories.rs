//! Category handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use tally_core::models::Category;

/// GET /api/categories - List the seeded categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.db.list_categories().map_err(AppError::from_core)?;
    Ok(Json(categories))
}
