//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;

    // Categories must exist before entries can be resolved (idempotent)
    db.seed_default_categories()
        .context("Failed to seed categories")?;

    tally_server::serve(db, host, port).await?;

    Ok(())
}
