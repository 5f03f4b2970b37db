//! Strip command: remove leading frontmatter blocks

use std::path::Path;

use colored::Colorize;
use tracing::warn;

use vault_content::strip_frontmatter;
use vault_fs::{find_markdown_files, read_text};

use crate::commands::{PlannedChange, apply_changes};
use crate::error::Result;

/// Run the strip command over every Markdown file under *directory*.
pub fn run_strip(directory: &Path, go: bool, yes: bool) -> Result<()> {
    println!(
        "{} Stripping frontmatter under {}",
        "=>".blue().bold(),
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
        if let Some(body) = strip_frontmatter(&text) {
            changes.push(PlannedChange {
                path: path.clone(),
                new_text: body.to_string(),
                note: "frontmatter removed".to_string(),
            });
        }
    }

    apply_changes(directory, &changes, "strip", go, yes)
}
