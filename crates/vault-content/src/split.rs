//! Block splitter and metadata-block validator
//!
//! Splits the leading portion of a document on `---` delimiter lines and
//! classifies each chunk: either it parses as a YAML mapping and passes the
//! implicit-null guard (a metadata block), or it marks the start of the body.
//! Parse failure is the designed end-of-frontmatter signal, not an error.

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::guard::has_implicit_null;

/// Delimiter separating frontmatter blocks from each other and the body.
const DELIMITER: &str = "\n---\n";

/// A document split into its accepted metadata blocks and remaining body.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDocument {
    /// Accepted metadata blocks, in document order.
    pub blocks: Vec<Mapping>,
    /// Everything after the last accepted block, whitespace-trimmed at both
    /// ends but otherwise verbatim (rejected chunks are re-joined with the
    /// original delimiter so no text is lost).
    pub body: String,
}

/// Split a document into consecutive frontmatter blocks and a body.
///
/// Scanning is front-to-back only: once a chunk is rejected, it and every
/// later chunk belong to the body regardless of any further delimiters.
pub fn split_document(text: &str) -> SplitDocument {
    if !text.trim_start().starts_with("---") {
        return SplitDocument {
            blocks: Vec::new(),
            body: text.to_string(),
        };
    }

    let mut parts: Vec<&str> = text.split(DELIMITER).collect();

    // Empty file, or a file holding nothing but a delimiter.
    if parts.len() == 1 && parts[0].trim().is_empty() {
        return SplitDocument {
            blocks: Vec::new(),
            body: text.to_string(),
        };
    }

    // A file starting with a blank-then-delimiter yields an empty first
    // segment; discard it before classification.
    if parts.first().is_some_and(|p| p.trim().is_empty()) {
        parts.remove(0);
    }

    let mut blocks = Vec::new();
    let mut body_parts: Vec<&str> = Vec::new();
    let mut in_body = false;

    for part in parts {
        if in_body {
            body_parts.push(part);
            continue;
        }
        match serde_yaml::from_str::<Value>(part) {
            Ok(Value::Mapping(mapping)) => {
                if has_implicit_null(part, &mapping) {
                    debug!("chunk rejected: implicit null detected");
                    in_body = true;
                    body_parts.push(part);
                } else {
                    blocks.push(mapping);
                }
            }
            Ok(_) => {
                // Scalar, sequence, or empty document: body content.
                in_body = true;
                body_parts.push(part);
            }
            Err(err) => {
                debug!("chunk rejected: {err}");
                in_body = true;
                body_parts.push(part);
            }
        }
    }

    SplitDocument {
        blocks,
        body: body_parts.join(DELIMITER).trim().to_string(),
    }
}
