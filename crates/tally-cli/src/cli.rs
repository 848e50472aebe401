//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Log informal expense entries, track spending against a budget
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Self-hosted expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed default categories
    Init,

    /// Log one expense, e.g. `tally add 1500 дом`
    Add {
        /// Entry text: an amount followed by category text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id printed by `add`
        id: String,
    },

    /// Show today's spending by category
    Today {
        /// Skip the grand-total line
        #[arg(long)]
        no_total: bool,
    },

    /// Show this month's spending by category
    Month {
        /// Report the previous calendar month instead
        #[arg(long)]
        previous: bool,

        /// Skip the grand-total line
        #[arg(long)]
        no_total: bool,
    },

    /// Show planned vs cumulative actual spend for the month
    Budget {
        /// Report the previous calendar month instead
        #[arg(long)]
        previous: bool,

        /// Daily budget in the smallest currency unit (default 1000)
        #[arg(long)]
        daily: Option<i64>,

        /// Monthly budget in the smallest currency unit (default 31000)
        #[arg(long)]
        monthly: Option<i64>,
    },

    /// List categories and their aliases
    Categories,

    /// Start the REST server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
