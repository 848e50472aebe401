//! Tally CLI - Self-hosted expense tracker
//!
//! Usage:
//!   tally init                Initialize database and seed categories
//!   tally add 1500 дом        Log an expense
//!   tally month               Show this month's spending by category
//!   tally serve --port 3000   Start the REST server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add { text } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, &text.join(" "))
        }
        Commands::Delete { id } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_delete(&db, &id)
        }
        Commands::Today { no_total } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_today(&db, !no_total)
        }
        Commands::Month { previous, no_total } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_month(&db, previous, !no_total)
        }
        Commands::Budget {
            previous,
            daily,
            monthly,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_budget(&db, previous, daily, monthly)
        }
        Commands::Categories => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_categories(&db)
        }
        Commands::Serve { port, host } => commands::cmd_serve(&cli.db, &host, port).await,
    }
}
