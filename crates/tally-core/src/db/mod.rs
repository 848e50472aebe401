//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `categories` - category lookup, free-text resolution, and seeding
//! - `expenses` - expense insert/delete and range scans
//! - `reports` - windowed aggregation and budget-projection curves

use chrono::{DateTime, NaiveDate, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod categories;
mod expenses;
mod reports;


pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Format a DateTime<Utc> the way SQLite stores it
pub(crate) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Midnight timestamp string for a date, used as a window boundary.
/// Compares lexicographically against the stored datetime format.
pub(crate) fn day_start(day: NaiveDate) -> String {
    format!("{} 00:00:00", day)
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database connection pool and run migrations
    pub fn new(path: &str) -> Result<Self> {
        // Foreign keys are a per-connection setting, so every pooled
        // connection enables them at checkout.
        let manager = SqliteConnectionManager::file(path)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self { pool };
        db.run_migrations()?;

        Ok(db)
    }

    /// Create a database for testing
    ///
    /// Uses a temporary file rather than `:memory:` because each pooled
    /// connection to an in-memory database would see its own empty copy.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!("/tmp/tally_test_{}.db", id);

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- WAL mode: readers don't block the insert path
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            -- Spending buckets, seeded once at setup and read-only afterwards
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                is_base_expenses INTEGER NOT NULL DEFAULT 0,
                -- JSON array of lowercase alias strings
                aliases TEXT NOT NULL DEFAULT '[]'
            );

            -- Logged expenses; inserted and deleted, never updated
            CREATE TABLE IF NOT EXISTS expenses (
                id TEXT PRIMARY KEY,
                date DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                category_id TEXT NOT NULL REFERENCES categories(id),
                amount INTEGER NOT NULL CHECK (amount > 0),
                raw_text TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category_id);
            "#,
        )?;

        info!("Database migrations complete");
        Ok(())
    }
}
