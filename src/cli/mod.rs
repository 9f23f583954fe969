//! Command-line interface for the catalog server.

mod commands;

use clap::{Parser, Subcommand};

/// Star Wars catalog REST API
#[derive(Parser)]
#[command(name = "swapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Apply database migrations and exit
    Migrate,

    /// Create an API user
    CreateUser {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Store the account as inactive
        #[arg(long)]
        inactive: bool,
    },
}

pub use commands::*;
