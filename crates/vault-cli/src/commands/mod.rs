//! Command implementations for vault-cli

pub mod dataview;
pub mod dedup;
pub mod strip;
pub mod unclobber;

pub use dataview::run_dataview_limit;
pub use dedup::run_dedup;
pub use strip::run_strip;
pub use unclobber::run_unclobber;

use std::path::{Path, PathBuf};

use colored::Colorize;

use vault_fs::BackupDir;

use crate::error::Result;
use crate::interactive::confirm;

/// Directory under the vault root that per-run backup folders are created
/// in. Hidden, so discovery never picks the copies back up.
const BACKUP_BASE: &str = ".vault-backups";

/// One planned in-place rewrite of a file.
pub struct PlannedChange {
    pub path: PathBuf,
    pub new_text: String,
    /// Short human-readable summary, shown next to the path.
    pub note: String,
}

/// Preview or apply a set of planned rewrites.
///
/// Dry runs only list the planned changes. With `go`, the user is asked to
/// confirm (unless `yes`), every file is backed up under the vault root,
/// and files are rewritten atomically.
pub fn apply_changes(
    root: &Path,
    changes: &[PlannedChange],
    tool: &str,
    go: bool,
    yes: bool,
) -> Result<()> {
    if changes.is_empty() {
        println!("{} Nothing to change.", "OK".green().bold());
        return Ok(());
    }

    for change in changes {
        println!(
            "   {} {} ({})",
            "~".yellow(),
            change.path.display().to_string().cyan(),
            change.note.dimmed()
        );
    }

    if !go {
        println!();
        println!(
            "Dry run: {} files would change. Re-run with {} to apply.",
            changes.len(),
            "--go".cyan()
        );
        return Ok(());
    }

    if !yes && !confirm(&format!("About to rewrite {} files. Continue?", changes.len()))? {
        println!("Cancelled.");
        return Ok(());
    }

    let backup = BackupDir::create(&root.join(BACKUP_BASE), tool)?;
    println!("Backing up originals to {}", backup.path().display());

    for change in changes {
        backup.backup_file(&change.path)?;
        vault_fs::write_text(&change.path, &change.new_text)?;
    }

    println!(
        "{} Updated {} files.",
        "OK".green().bold(),
        changes.len()
    );
    Ok(())
}
