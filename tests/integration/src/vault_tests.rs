//! End-to-end vault scenarios
//!
//! Exercises the full unclobber pipeline and the filesystem layer together,
//! the way the CLI drives them.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use vault_content::{Outcome, unclobber_auto};
use vault_fs::{find_duplicates, find_markdown_files, plan_dedup, read_text, write_text};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Test vault builder for standardized setup
struct TestVault {
    temp_dir: TempDir,
}

impl TestVault {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    fn add_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Run the unclobber pipeline over every note, writing replacements
    /// back, and return the paths that changed.
    fn unclobber_all(&self) -> Vec<PathBuf> {
        let mut changed = Vec::new();
        for path in find_markdown_files(self.root()) {
            let text = read_text(&path).unwrap();
            if let Outcome::Replacement { text, .. } = unclobber_auto(&text).unwrap() {
                write_text(&path, &text).unwrap();
                changed.push(path);
            }
        }
        changed
    }
}

// =============================================================================
// Unclobber scenarios
// =============================================================================

#[test]
fn clobbered_vault_is_repaired_in_place() {
    let vault = TestVault::new();
    let clobbered = vault.add_note(
        "daily/2024-01-01.md",
        "---\ntitle: Daily\ntags: [log]\n---\ntags: [daily]\n---\n# Morning\n\nNotes.\n",
    );
    let clean = vault.add_note("clean.md", "---\ntitle: Clean\n---\n\nBody.\n");

    let changed = vault.unclobber_all();
    assert_eq!(changed, vec![clobbered.clone()]);

    assert_eq!(
        fs::read_to_string(&clobbered).unwrap(),
        "---\ntitle: Daily\ntags:\n  - daily\n  - log\n---\n\n# Morning\n\nNotes.\n"
    );
    assert_eq!(
        fs::read_to_string(&clean).unwrap(),
        "---\ntitle: Clean\n---\n\nBody.\n"
    );
}

#[test]
fn repair_is_idempotent_across_runs() {
    let vault = TestVault::new();
    vault.add_note(
        "note.md",
        "---\ncreated: \"2023-01-01T00:00:00Z\"\n---\ncreated: \"2024-06-01T00:00:00Z\"\nstatus: active\n---\nBody\n",
    );

    assert_eq!(vault.unclobber_all().len(), 1);
    assert_eq!(vault.unclobber_all().len(), 0);
}

#[test]
fn latest_created_date_survives() {
    let vault = TestVault::new();
    let path = vault.add_note(
        "note.md",
        "---\ncreated: \"2023-01-01T00:00:00Z\"\n---\ncreated: \"2024-06-01T00:00:00Z\"\n---\nBody\n",
    );
    vault.unclobber_all();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("2024-06-01T00:00:00Z"));
    assert!(!text.contains("2023-01-01T00:00:00Z"));
}

#[test]
fn flashcards_with_implicit_nulls_are_never_touched() {
    let vault = TestVault::new();
    let original = "---\nquestion:\n\nWhat is Rust?\n---\nA systems language.\n";
    vault.add_note("flashcards/card.md", original);

    assert!(vault.unclobber_all().is_empty());
    assert_eq!(
        fs::read_to_string(vault.root().join("flashcards/card.md")).unwrap(),
        original
    );
}

#[test]
fn key_union_preserves_single_source_values() {
    let vault = TestVault::new();
    let path = vault.add_note(
        "note.md",
        "---\ntitle: Note\nauthor: me\n---\nstatus: draft\n---\nBody\n",
    );
    vault.unclobber_all();

    let text = fs::read_to_string(&path).unwrap();
    let doc = vault_content::split_document(&text);
    assert_eq!(doc.blocks.len(), 1);
    let block = &doc.blocks[0];
    let get = |k: &str| block.get(serde_yaml::Value::String(k.into())).unwrap();
    assert_eq!(get("title"), &serde_yaml::Value::String("Note".into()));
    assert_eq!(get("author"), &serde_yaml::Value::String("me".into()));
    assert_eq!(get("status"), &serde_yaml::Value::String("draft".into()));
}

// =============================================================================
// Dedup scenarios
// =============================================================================

#[test]
fn dedup_ignores_frontmatter_when_comparing() {
    let vault = TestVault::new();
    let a = vault.add_note("topic.md", "---\ncreated: 2023-01-01\n---\nShared body.\n");
    let b = vault.add_note(
        "topic (1).md",
        "---\ncreated: 2024-12-31\n---\nShared body.\n",
    );

    let groups = find_duplicates(&[a.clone(), b.clone()]);
    let plan = plan_dedup(&groups);
    assert_eq!(plan.deletions, vec![b]);
    assert!(plan.renames.is_empty());
}

#[test]
fn discovery_feeds_dedup_deterministically() {
    let vault = TestVault::new();
    vault.add_note("x.md", "same\n");
    vault.add_note("sub/x (1).md", "same\n");
    vault.add_note("unique.md", "different\n");

    let files = find_markdown_files(vault.root());
    assert_eq!(files.len(), 3);

    let groups = find_duplicates(&files);
    assert_eq!(groups.len(), 1);
    let plan = plan_dedup(&groups);
    assert_eq!(plan.deletions.len(), 1);
    assert!(plan.deletions[0].ends_with("x (1).md"));
}
