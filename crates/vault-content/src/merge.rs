//! Key-by-key merge of frontmatter blocks
//!
//! Blocks are folded in document order into one mapping, preserving
//! first-seen key order. Same-type values merge structurally (date-like
//! strings by recency, lists by sorted set union); anything else is a
//! conflict routed through an injected [`ConflictResolver`], so the merge
//! itself stays deterministic and free of user I/O.

use serde::Serialize;
use serde_yaml::{Mapping, Sequence, Value};
use tracing::warn;

use crate::error::Result;
use crate::value::{compare, is_datestamp, key_text, parse_datestamp};

/// Which side of a conflict to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Existing,
    Incoming,
}

/// Decision capability consumed by the merge on incomparable conflicts.
///
/// Implementations must not assume they are called at most once per key; a
/// key clobbered across three blocks can conflict twice.
pub trait ConflictResolver {
    fn resolve(&mut self, key: &str, existing: &Value, incoming: &Value) -> Result<Choice>;
}

/// Non-interactive policy: the later-seen value wins.
#[derive(Debug, Default)]
pub struct AutoResolver;

impl ConflictResolver for AutoResolver {
    fn resolve(&mut self, _key: &str, _existing: &Value, _incoming: &Value) -> Result<Choice> {
        Ok(Choice::Incoming)
    }
}

/// Record of one resolved conflict, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub key: String,
    pub kept: Value,
    pub discarded: Value,
}

/// Sorted deduplicated union of the given values.
fn union_sorted(values: impl IntoIterator<Item = Value>) -> Sequence {
    let mut out: Sequence = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out.sort_by(compare);
    out
}

/// Merge date-like string values by keeping the most recent timestamp.
///
/// Policy note: two historical variants of this tool disagreed on whether
/// the earliest or latest timestamp survives; this implementation keeps the
/// latest.
fn merge_datestamps(existing: Value, incoming: Value) -> Value {
    let a = existing.as_str().and_then(parse_datestamp);
    let b = incoming.as_str().and_then(parse_datestamp);
    match (a, b) {
        (Some(a), Some(b)) if b > a => incoming,
        _ => existing,
    }
}

/// Fold an ordered sequence of accepted metadata blocks into one mapping.
///
/// Returns the merged mapping (keys in first-seen order) together with the
/// conflict records the resolver was consulted for.
pub fn merge_blocks(
    blocks: &[Mapping],
    resolver: &mut dyn ConflictResolver,
) -> Result<(Mapping, Vec<Conflict>)> {
    let mut merged = Mapping::new();
    let mut conflicts = Vec::new();

    for block in blocks {
        for (key, value) in block {
            let Some(existing) = merged.get(key) else {
                merged.insert(key.clone(), value.clone());
                continue;
            };
            let existing = existing.clone();
            let incoming = value.clone();

            let resolved = if is_datestamp(&existing) && is_datestamp(&incoming) {
                merge_datestamps(existing, incoming)
            } else {
                match (existing, incoming) {
                    (Value::Sequence(a), Value::Sequence(b)) => {
                        Value::Sequence(union_sorted(a.into_iter().chain(b)))
                    }
                    (Value::Sequence(a), b) => {
                        Value::Sequence(union_sorted(a.into_iter().chain([b])))
                    }
                    (a, Value::Sequence(b)) => {
                        Value::Sequence(union_sorted(b.into_iter().chain([a])))
                    }
                    (a, b) if a == b => a,
                    (a, b) => {
                        let name = key_text(key);
                        let choice = resolver.resolve(&name, &a, &b)?;
                        let (kept, discarded) = match choice {
                            Choice::Existing => (a, b),
                            Choice::Incoming => (b, a),
                        };
                        warn!(key = %name, "conflict: kept {kept:?} over {discarded:?}");
                        conflicts.push(Conflict {
                            key: name,
                            kept: kept.clone(),
                            discarded,
                        });
                        kept
                    }
                }
            };

            merged.insert(key.clone(), resolved);
        }
    }

    Ok((merged, conflicts))
}
