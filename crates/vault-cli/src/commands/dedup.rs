//! Dedup command: remove duplicate notes by content

use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::{info, warn};

use vault_fs::{BackupDir, find_duplicates, find_markdown_files, plan_dedup};

use crate::commands::BACKUP_BASE;
use crate::error::Result;
use crate::interactive::confirm;

/// Run the dedup command over every Markdown file under *directory*.
pub fn run_dedup(directory: &Path, go: bool, yes: bool) -> Result<()> {
    println!(
        "{} Deduplicating notes under {}",
        "=>".blue().bold(),
        directory.display()
    );

    let files = find_markdown_files(directory);
    if files.is_empty() {
        println!("No Markdown files found. Nothing to do.");
        return Ok(());
    }

    let groups = find_duplicates(&files);
    let plan = plan_dedup(&groups);
    if plan.is_empty() {
        println!("{} No duplicates found.", "OK".green().bold());
        return Ok(());
    }

    for path in &plan.deletions {
        println!(
            "   {} delete {}",
            "-".yellow(),
            path.display().to_string().cyan()
        );
    }
    for (from, to) in &plan.renames {
        println!(
            "   {} rename {} -> {}",
            "~".yellow(),
            from.display().to_string().cyan(),
            to.display().to_string().cyan()
        );
    }

    if !go {
        println!();
        println!(
            "Dry run: {} deletions, {} renames. Re-run with {} to apply.",
            plan.deletions.len(),
            plan.renames.len(),
            "--go".cyan()
        );
        return Ok(());
    }

    if !yes
        && !confirm(&format!(
            "About to delete {} and rename {} files. Are you sure?",
            plan.deletions.len(),
            plan.renames.len()
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let backup = BackupDir::create(&directory.join(BACKUP_BASE), "dedup")?;
    println!("Backing up originals to {}", backup.path().display());

    for (from, to) in &plan.renames {
        if to.exists() {
            warn!(
                "skipping rename of {} -> {}: destination exists",
                from.display(),
                to.display()
            );
            continue;
        }
        backup.backup_file(from)?;
        fs::rename(from, to).map_err(|e| vault_fs::Error::io(from, e))?;
        info!("renamed {} -> {}", from.display(), to.display());
    }

    for path in &plan.deletions {
        backup.backup_file(path)?;
        fs::remove_file(path).map_err(|e| vault_fs::Error::io(path, e))?;
        info!("deleted {}", path.display());
    }

    println!(
        "{} Removed {} duplicates.",
        "OK".green().bold(),
        plan.deletions.len()
    );
    Ok(())
}
