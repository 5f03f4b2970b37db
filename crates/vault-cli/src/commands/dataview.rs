//! Dataview-limit command: bound unbounded dataview queries

use std::path::Path;

use colored::Colorize;
use tracing::warn;

use vault_content::dataview::add_limits;
use vault_fs::{find_markdown_files, read_text};

use crate::commands::{PlannedChange, apply_changes};
use crate::error::Result;

/// Run the dataview-limit command over every Markdown file under
/// *directory*.
pub fn run_dataview_limit(directory: &Path, limit: u32, go: bool, yes: bool) -> Result<()> {
    println!(
        "{} Adding LIMIT {} to dataview queries under {}",
        "=>".blue().bold(),
        limit,
        directory.display()
    );

    let files = find_markdown_files(directory);
    if files.is_empty() {
        println!("No Markdown files found. Nothing to do.");
        return Ok(());
    }

    let mut changes = Vec::new();
    for path in &files {
        let text = match read_text(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        if let Some(new_text) = add_limits(&text, limit) {
            changes.push(PlannedChange {
                path: path.clone(),
                new_text,
                note: format!("LIMIT {limit} added"),
            });
        }
    }

    apply_changes(directory, &changes, "dataview-limit", go, yes)
}
