//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - init/add/delete/categories and the shared open_db utility
//! - `reports` - today/month breakdowns and the budget table
//! - `serve` - Web server command

pub mod core;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use reports::*;
pub use serve::*;
