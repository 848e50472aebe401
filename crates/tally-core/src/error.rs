//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raw text does not look like an expense entry, or the store rejected
    /// the record. Carries a user-facing message.
    #[error("{0}")]
    InvalidMessage(String),

    /// Parsed category text matches no known name or alias. User-facing.
    #[error("{0}")]
    InvalidCategory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
