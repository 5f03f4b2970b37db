//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vault Tools - Maintenance toolkit for Markdown note vaults
#[derive(Parser, Debug)]
#[command(name = "vault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge duplicated frontmatter blocks into a single block
    ///
    /// Repairs documents that accumulated two or more consecutive YAML
    /// frontmatter blocks through bad version-control merges. Runs as a
    /// preview by default.
    ///
    /// Examples:
    ///   vault unclobber ~/vault            # preview repairs
    ///   vault unclobber ~/vault --go       # apply repairs
    ///   vault unclobber -i ~/vault --go    # prompt on conflicts
    Unclobber {
        /// Directory containing Markdown files to process
        #[arg(env = "VAULT_PATH")]
        directory: PathBuf,

        /// Apply changes to files; defaults to a dry run
        #[arg(long)]
        go: bool,

        /// Resolve value conflicts with a prompt instead of keeping the
        /// later value
        #[arg(short, long)]
        interactive: bool,

        /// Skip the confirmation prompt before writing
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Remove the leading frontmatter block from every file
    ///
    /// Examples:
    ///   vault strip ~/vault/flashcards
    ///   vault strip ~/vault/flashcards --go
    Strip {
        /// Directory containing Markdown files to process
        #[arg(env = "VAULT_PATH")]
        directory: PathBuf,

        /// Apply changes to files; defaults to a dry run
        #[arg(long)]
        go: bool,

        /// Skip the confirmation prompt before writing
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete duplicate notes, comparing content without frontmatter
    ///
    /// Keeps the copy with the lowest " (N)" suffix and renames it to drop
    /// the suffix when possible.
    Dedup {
        /// Directory containing Markdown files to deduplicate
        #[arg(env = "VAULT_PATH")]
        directory: PathBuf,

        /// Apply changes to files; defaults to a dry run
        #[arg(long)]
        go: bool,

        /// Skip the confirmation prompt before deleting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Append a LIMIT clause to unbounded dataview queries
    DataviewLimit {
        /// Directory containing Markdown files to process
        #[arg(env = "VAULT_PATH")]
        directory: PathBuf,

        /// Value for the LIMIT clause
        #[arg(short, long, default_value_t = 1000)]
        limit: u32,

        /// Apply changes to files; defaults to a dry run
        #[arg(long)]
        go: bool,

        /// Skip the confirmation prompt before writing
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
