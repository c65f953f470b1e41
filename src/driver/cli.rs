//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// ユーザーを登録・管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "user-registry")]
#[command(about = "Register and manage users", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// JSON user store path (overrides the config file; in-memory when unset)
    #[arg(long)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new user
    Register {
        id: String,
        name: String,
        /// Accepted for compatibility, not stored
        #[arg(long)]
        mail_address: Option<String>,
    },
    /// Show a user
    Get { id: String },
    /// Rename a user
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a user (no-op when absent)
    Delete { id: String },
    /// Read commands interactively from stdin
    Shell,
}
