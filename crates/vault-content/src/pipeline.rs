//! Unclobber pipeline: split, merge, re-emit
//!
//! Orchestrates the full repair of one document. Stages run strictly in
//! sequence and the input text is never mutated; the caller receives either
//! an [`Outcome::Unchanged`] signal or the full replacement text.

use serde::Serialize;
use tracing::info;

use crate::emit::{EmitStyle, emit_block};
use crate::error::Result;
use crate::merge::{AutoResolver, Conflict, ConflictResolver, merge_blocks};
use crate::split::split_document;

/// Advisory summary of one document's repair.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of metadata blocks accepted by the splitter.
    pub blocks_found: usize,
    /// Conflicts the resolver was consulted for.
    pub conflicts: Vec<Conflict>,
}

/// Result of running the pipeline on one document.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Fewer than two metadata blocks: nothing to unclobber.
    Unchanged,
    /// The document should be replaced with `text`.
    Replacement { text: String, report: Report },
}

impl Outcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::Unchanged)
    }
}

/// Repair a document with duplicated frontmatter.
///
/// Splits the text into metadata blocks and body, merges the blocks through
/// the injected resolver, and reassembles the document around the untouched
/// body. Documents with zero or one block are reported unchanged.
pub fn unclobber(
    text: &str,
    resolver: &mut dyn ConflictResolver,
    style: &EmitStyle,
) -> Result<Outcome> {
    let doc = split_document(text);
    if doc.blocks.len() <= 1 {
        return Ok(Outcome::Unchanged);
    }

    info!("{} frontmatter blocks found", doc.blocks.len());

    let (merged, conflicts) = merge_blocks(&doc.blocks, resolver)?;
    let frontmatter = emit_block(&merged, style)?;
    let text = format!("---\n{frontmatter}---\n\n{}\n", doc.body);

    Ok(Outcome::Replacement {
        text,
        report: Report {
            blocks_found: doc.blocks.len(),
            conflicts,
        },
    })
}

/// [`unclobber`] with the automatic later-value-wins policy and default
/// layout.
pub fn unclobber_auto(text: &str) -> Result<Outcome> {
    unclobber(text, &mut AutoResolver, &EmitStyle::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn replacement(text: &str) -> (String, Report) {
        match unclobber_auto(text).unwrap() {
            Outcome::Replacement { text, report } => (text, report),
            Outcome::Unchanged => panic!("expected a replacement"),
        }
    }

    #[test]
    fn no_frontmatter_is_unchanged() {
        assert!(unclobber_auto("Plain body only.\n").unwrap().is_unchanged());
    }

    #[test]
    fn single_block_is_unchanged() {
        let text = "---\ntitle: Note\n---\n\nBody.\n";
        assert!(unclobber_auto(text).unwrap().is_unchanged());
    }

    #[test]
    fn implicit_null_document_is_unchanged() {
        let text = "---\nquestion:\n\nAnswer text\n---\nMore\n";
        assert!(unclobber_auto(text).unwrap().is_unchanged());
    }

    #[test]
    fn two_blocks_are_merged() {
        let (text, report) = replacement("---\na: 1\n---\na: 2\nb: 3\n---\nBody text\n");
        assert_eq!(text, "---\na: 2\nb: 3\n---\n\nBody text\n");
        assert_eq!(report.blocks_found, 2);
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].key, "a");
    }

    #[test]
    fn disjoint_blocks_merge_without_conflicts() {
        let (text, report) =
            replacement("---\ntitle: Note\n---\ntags: [b, a]\n---\nBody\n");
        assert_eq!(text, "---\ntitle: Note\ntags:\n  - a\n  - b\n---\n\nBody\n");
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn pipeline_is_idempotent() {
        let (once, _) = replacement("---\na: 1\n---\nb: 2\n---\nBody text\n");
        assert!(unclobber_auto(&once).unwrap().is_unchanged());
    }

    #[test]
    fn idempotent_with_lists_and_dates() {
        let (once, _) = replacement(
            "---\ntags: [b, a]\ncreated: \"2023-01-01T00:00:00Z\"\n---\n\
             tags: [c]\ncreated: \"2024-06-01T00:00:00Z\"\n---\nBody\n",
        );
        assert!(unclobber_auto(&once).unwrap().is_unchanged());
    }

    #[test]
    fn body_is_preserved_verbatim() {
        let body = "# Heading\n\nSome *markdown* with `code`.\n\n- list\n";
        let input = format!("---\na: 1\n---\nb: 2\n---\n{body}");
        let (text, _) = replacement(&input);
        assert!(text.ends_with("---\n\n# Heading\n\nSome *markdown* with `code`.\n\n- list\n"));
    }

    #[test]
    fn multi_line_strings_survive_as_block_scalars() {
        let (text, report) =
            replacement("---\ndesc: |\n  line1\n  line2\n---\nother: 1\n---\nBody\n");
        assert_eq!(text, "---\ndesc: |\n  line1\n  line2\nother: 1\n---\n\nBody\n");
        assert!(report.conflicts.is_empty());
        assert!(unclobber_auto(&text).unwrap().is_unchanged());
    }

    #[test]
    fn emit_failure_surfaces_as_error() {
        let text = "---\nouter:\n  inner:\n    too: deep\n---\nalso: here\n---\nBody\n";
        assert!(unclobber_auto(text).is_err());
    }
}
