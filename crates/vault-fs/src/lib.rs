//! Filesystem layer for Vault Tools
//!
//! Everything here touches disk; the pure text transforms live in
//! `vault-content`. Provides vault discovery, copy-before-write backups,
//! frontmatter-agnostic content checksums, duplicate planning, and atomic
//! writes.

pub mod backup;
pub mod checksum;
pub mod dedup;
pub mod discover;
pub mod error;
pub mod io;

pub use backup::BackupDir;
pub use checksum::{content_checksum, file_checksum};
pub use dedup::{DedupPlan, find_duplicates, numeric_suffix, plan_dedup};
pub use discover::find_markdown_files;
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
