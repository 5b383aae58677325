//! CLI module - Command-line interface for Urenstaat
//!
//! Administrative operations (user bootstrap, password reset) live here and
//! are never exposed over HTTP.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Urenstaat - hour registration and invoicing
#[derive(Parser)]
#[command(name = "urenstaat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Create the administrator account if it does not exist yet
    CreateAdmin {
        /// Username of the account
        #[arg(long, default_value = "admin")]
        username: String,
        /// Password to set; a random one is generated and printed when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Replace the password of an existing user
    SetPassword {
        /// Username of the account
        username: String,
        /// New password; a random one is generated and printed when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// List all employees
    #[command(alias = "ls")]
    Employees,

    /// List every billing period that has hours
    Periods,

    /// Print the invoice of an employee for a period
    Invoice {
        /// Employee ID
        employee_id: i32,
        /// Period label, e.g. 2024-03
        period: String,
    },
}

pub use commands::*;
