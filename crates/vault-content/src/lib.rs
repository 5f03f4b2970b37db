//! Frontmatter parsing, merging, and re-emission for Vault Tools
//!
//! The central pipeline repairs "clobbered" frontmatter: documents that
//! accumulated two or more consecutive YAML metadata blocks through bad
//! version-control merges. Everything in this crate is a pure text
//! transformation; file I/O lives in `vault-fs` and the CLI.

pub mod dataview;
pub mod emit;
pub mod error;
pub mod guard;
pub mod merge;
pub mod pipeline;
pub mod split;
pub mod strip;
pub mod value;

pub use emit::{EmitStyle, emit_block};
pub use error::{Error, Result};
pub use merge::{AutoResolver, Choice, Conflict, ConflictResolver, merge_blocks};
pub use pipeline::{Outcome, Report, unclobber, unclobber_auto};
pub use split::{SplitDocument, split_document};
pub use strip::strip_frontmatter;
