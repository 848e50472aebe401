//! Request handlers
//!
//! Handlers are organized by domain:
//! - `categories` - category listing
//! - `expenses` - expense logging, range queries, and deletion
//! - `reports` - spending breakdowns and budget curves

mod categories;
mod expenses;
mod reports;

pub use categories::*;
pub use expenses::*;
pub use reports::*;

use axum::Json;

/// GET /health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
