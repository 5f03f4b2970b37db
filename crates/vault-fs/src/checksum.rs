//! SHA-256 content checksums, frontmatter excluded
//!
//! Duplicate detection must treat two copies of a note as identical even
//! when only their metadata headers drifted apart, so hashes are computed
//! over the frontmatter-stripped body. Checksums use the canonical
//! `sha256:<hex>` format.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::warn;

use vault_content::strip_frontmatter;

use crate::error::{Error, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the checksum of string content, ignoring a leading frontmatter
/// block.
pub fn content_checksum(text: &str) -> String {
    let body = strip_frontmatter(text).unwrap_or(text);
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the checksum of a file's contents, ignoring frontmatter.
///
/// Files that are not valid UTF-8 are read lossily (with replacement
/// characters) and a warning is logged, matching how they would be
/// displayed elsewhere.
pub fn file_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{} is not valid UTF-8; hashing with replacement characters", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(content_checksum(&text))
}
