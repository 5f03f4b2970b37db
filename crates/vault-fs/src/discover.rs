//! Recursive Markdown file discovery

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Recursively find all Markdown files under *root*.
///
/// Hidden files and directories (`.obsidian`, `.vault-backups`, ...) are
/// skipped. Unreadable directory entries are logged and skipped rather than
/// aborting the walk. Results are sorted for deterministic processing order.
pub fn find_markdown_files(root: &Path) -> Vec<PathBuf> {
    info!("searching for markdown files in {}", root.display());

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        })
        .collect();
    files.sort();

    info!("found {} markdown files", files.len());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_markdown_recursively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.md"), "b").unwrap();
        fs::write(dir.path().join("sub/ignored.txt"), "x").unwrap();

        let files = find_markdown_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "md"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("NOTE.MD"), "a").unwrap();
        assert_eq!(find_markdown_files(dir.path()).len(), 1);
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::create_dir(dir.path().join(".vault-backups")).unwrap();
        fs::write(dir.path().join(".vault-backups/a.md"), "a").unwrap();
        fs::write(dir.path().join(".hidden.md"), "x").unwrap();

        let files = find_markdown_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.md"));
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(find_markdown_files(dir.path()).is_empty());
    }

    #[test]
    fn results_are_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        let files = find_markdown_files(dir.path());
        assert!(files[0].ends_with("a.md"));
        assert!(files[1].ends_with("b.md"));
    }
}
