//! Unclobber command: merge duplicated frontmatter blocks

use std::path::Path;

use colored::Colorize;
use tracing::warn;

use vault_content::{AutoResolver, ConflictResolver, EmitStyle, Outcome, unclobber};
use vault_fs::{find_markdown_files, read_text};

use crate::commands::{PlannedChange, apply_changes};
use crate::error::{CliError, Result};
use crate::interactive::PromptResolver;

/// Run the unclobber command over every Markdown file under *directory*.
pub fn run_unclobber(directory: &Path, interactive: bool, go: bool, yes: bool) -> Result<()> {
    println!(
        "{} Scanning for clobbered frontmatter in {}",
        "=>".blue().bold(),
        directory.display()
    );

    let files = find_markdown_files(directory);
    if files.is_empty() {
        println!("No Markdown files found. Nothing to do.");
        return Ok(());
    }

    let style = EmitStyle::default();
    let mut changes = Vec::new();
    let mut failures = 0usize;

    for path in &files {
        let text = match read_text(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                continue;
            }
        };

        let mut resolver: Box<dyn ConflictResolver> = if interactive {
            Box::new(PromptResolver { file: path.clone() })
        } else {
            Box::new(AutoResolver)
        };

        match unclobber(&text, resolver.as_mut(), &style) {
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Replacement { text, report }) => {
                changes.push(PlannedChange {
                    path: path.clone(),
                    new_text: text,
                    note: format!(
                        "{} blocks, {} conflicts",
                        report.blocks_found,
                        report.conflicts.len()
                    ),
                });
            }
            Err(err) => {
                // Fatal for this document only; the rest of the vault still
                // gets processed.
                eprintln!(
                    "{} {}: {}",
                    "error".red().bold(),
                    path.display(),
                    err
                );
                failures += 1;
            }
        }
    }

    apply_changes(directory, &changes, "unclobber", go, yes)?;

    if failures > 0 {
        return Err(CliError::user(format!(
            "{failures} files could not be repaired"
        )));
    }
    Ok(())
}
