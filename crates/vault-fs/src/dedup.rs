//! Duplicate-note detection and removal planning
//!
//! Files are grouped by frontmatter-stripped content checksum. Within a
//! group the copy with the lowest ` (N)` numeric suffix survives (no suffix
//! counts as zero); if the survivor itself carries a suffix it is renamed to
//! drop it, as long as the unsuffixed name is free.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::checksum::file_checksum;

/// Matches both `file.md` and `file (123).md`, extension case-insensitive.
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<stem>.*?)(?: \((?P<num>\d+)\))?\.(?i:md)$").unwrap());

/// Numeric suffix of a file name, `0` when absent.
pub fn numeric_suffix(file_name: &str) -> u32 {
    NUMBERED_RE
        .captures(file_name)
        .and_then(|caps| caps.name("num"))
        .and_then(|num| num.as_str().parse().ok())
        .unwrap_or(0)
}

fn unsuffixed_name(file_name: &str) -> Option<String> {
    let caps = NUMBERED_RE.captures(file_name)?;
    caps.name("num")?;
    Some(format!("{}.md", &caps["stem"]))
}

/// Group files by content checksum, keeping only groups with duplicates.
///
/// Unreadable files are logged and skipped so one bad file cannot abort the
/// scan. The map is ordered for deterministic reporting.
pub fn find_duplicates(files: &[PathBuf]) -> BTreeMap<String, Vec<PathBuf>> {
    let mut buckets: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in files {
        match file_checksum(path) {
            Ok(hash) => buckets.entry(hash).or_default().push(path.clone()),
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }
    buckets.retain(|_, paths| paths.len() > 1);
    buckets
}

/// Planned filesystem actions for one dedup run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupPlan {
    /// Redundant copies to delete.
    pub deletions: Vec<PathBuf>,
    /// Survivors to rename, `(from, to)`.
    pub renames: Vec<(PathBuf, PathBuf)>,
}

impl DedupPlan {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.renames.is_empty()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decide which duplicates to delete and which survivor to rename.
pub fn plan_dedup(groups: &BTreeMap<String, Vec<PathBuf>>) -> DedupPlan {
    let mut plan = DedupPlan::default();

    for paths in groups.values() {
        let mut paths = paths.clone();
        paths.sort_by_key(|p| numeric_suffix(&file_name(p)));
        let keep = &paths[0];
        plan.deletions.extend(paths[1..].iter().cloned());

        let keep_name = file_name(keep);
        if numeric_suffix(&keep_name) > 0
            && let Some(target) = unsuffixed_name(&keep_name)
        {
            plan.renames.push((keep.clone(), keep.with_file_name(target)));
        }
    }

    plan
}
