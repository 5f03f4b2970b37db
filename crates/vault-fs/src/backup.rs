//! Copy-before-write backups

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::{Error, Result};

/// A timestamped directory holding pre-modification copies of files.
///
/// One `BackupDir` is created per tool run, named `<tool>-<YYYYmmdd-HHMMSS>`
/// under the given base directory.
#[derive(Debug)]
pub struct BackupDir {
    root: PathBuf,
}

impl BackupDir {
    /// Create a fresh backup directory under *base* for the named tool.
    pub fn create(base: &Path, tool: &str) -> Result<Self> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let root = base.join(format!("{tool}-{stamp}"));
        fs::create_dir_all(&root).map_err(|e| Error::io(&root, e))?;
        Ok(Self { root })
    }

    /// Location of the backup directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Copy *file* into the backup directory, returning the backup path.
    pub fn backup_file(&self, file: &Path) -> Result<PathBuf> {
        let name = file
            .file_name()
            .ok_or_else(|| Error::io(file, std::io::Error::other("path has no file name")))?;
        let dest = self.root.join(name);
        fs::copy(file, &dest).map_err(|e| Error::io(file, e))?;
        debug!("backed up {} to {}", file.display(), dest.display());
        Ok(dest)
    }
}
