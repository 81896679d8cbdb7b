//! Command-line interface for acli
//!
//! Defines the clap command tree and dispatches each subcommand to its
//! handler. Handlers return `Err` with a display-ready message; `main`
//! prints it and maps the result to the process exit status.

pub mod config;
mod items;
mod prompt;
mod users;

use clap::{Parser, Subcommand};

/// Command-line application with persistent configuration
#[derive(Parser, Debug)]
#[command(name = "acli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration settings for the CLI application
    Config {
        #[command(subcommand)]
        command: config::ConfigCommand,
    },
    /// Manage users
    Users {
        #[command(subcommand)]
        command: users::UsersCommand,
    },
    /// Manage items
    Items {
        #[command(subcommand)]
        command: items::ItemsCommand,
    },
}

/// Run the parsed command to completion.
pub fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Config { command } => config::run(command, cli.verbose),
        Commands::Users { command } => users::run(command),
        Commands::Items { command } => items::run(command),
    }
}
