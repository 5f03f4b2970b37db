//! Vault Tools CLI
//!
//! The command-line interface for the vault maintenance toolkit.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Unclobber {
            directory,
            go,
            interactive,
            yes,
        } => commands::run_unclobber(&directory, interactive, go, yes),
        Commands::Strip { directory, go, yes } => commands::run_strip(&directory, go, yes),
        Commands::Dedup { directory, go, yes } => commands::run_dedup(&directory, go, yes),
        Commands::DataviewLimit {
            directory,
            limit,
            go,
            yes,
        } => commands::run_dataview_limit(&directory, limit, go, yes),
    }
}
