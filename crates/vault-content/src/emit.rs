//! Canonical frontmatter re-emitter
//!
//! Serializes a merged mapping back into a delimited block with stable
//! formatting. The layout is an explicit strategy value passed in by the
//! caller rather than process-wide serializer state, so the emitter stays
//! pure and testable.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::value::{compare, key_text};

/// Layout strategy for the canonical block.
#[derive(Debug, Clone)]
pub struct EmitStyle {
    /// Indent of nested mapping entries, in spaces.
    pub mapping_indent: usize,
    /// Column of a sequence entry's dash.
    pub sequence_offset: usize,
    /// Emit list values sorted ascending.
    pub sort_sequences: bool,
}

impl Default for EmitStyle {
    /// Two-space mappings, sequence dashes offset two spaces (entry text at
    /// column four), sorted lists.
    fn default() -> Self {
        Self {
            mapping_indent: 2,
            sequence_offset: 2,
            sort_sequences: true,
        }
    }
}

/// Render one scalar on a single line, quoting exactly when YAML requires it.
fn render_scalar(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let rendered = serde_yaml::to_string(value)
                .map_err(|_| Error::emit(key, "unserializable"))?;
            let rendered = rendered.trim_end_matches('\n');
            if rendered.contains('\n') {
                return Err(Error::emit(key, "multi-line"));
            }
            Ok(rendered.to_string())
        }
        Value::Sequence(_) => Err(Error::emit(key, "nested sequence")),
        Value::Mapping(_) => Err(Error::emit(key, "nested mapping")),
        Value::Tagged(_) => Err(Error::emit(key, "tagged")),
    }
}

/// Append `lead` and a block scalar (`|`, `|-`, or `|+` per trailing
/// newlines) with content indented to *indent* columns.
fn push_block_scalar(
    out: &mut String,
    lead: &str,
    key: &str,
    text: &str,
    indent: usize,
) -> Result<()> {
    // Block scalars infer their indentation from the first line; a leading
    // space would need an explicit indentation indicator.
    if text.starts_with(' ') || text.starts_with('\t') {
        return Err(Error::emit(key, "indented multi-line"));
    }

    let header = match text.strip_suffix('\n') {
        None => "|-",
        Some(body) if body.ends_with('\n') => "|+",
        Some(_) => "|",
    };
    out.push_str(&format!("{lead}{header}\n"));

    let body = text.strip_suffix('\n').unwrap_or(text);
    let pad = " ".repeat(indent);
    for line in body.split('\n') {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("{pad}{line}\n"));
        }
    }
    Ok(())
}

/// Append `lead` followed by a scalar value, switching to a block scalar
/// when the string spans lines.
fn push_scalar(
    out: &mut String,
    lead: &str,
    key: &str,
    value: &Value,
    indent: usize,
) -> Result<()> {
    if let Value::String(s) = value
        && s.contains('\n')
    {
        return push_block_scalar(out, lead, key, s, indent);
    }
    let rendered = render_scalar(key, value)?;
    out.push_str(&format!("{lead}{rendered}\n"));
    Ok(())
}

/// Serialize a merged mapping as the inside of a frontmatter block.
///
/// Keys are emitted in the mapping's iteration order. Values may be scalars,
/// lists of scalars, or one-level mappings of scalars; strings spanning lines
/// become block scalars, and anything deeper is an [`Error::Emit`] so the
/// caller never silently drops data.
pub fn emit_block(mapping: &Mapping, style: &EmitStyle) -> Result<String> {
    let mut out = String::new();
    for (key, value) in mapping {
        let key_name = render_scalar(&key_text(key), key)?;
        match value {
            Value::Sequence(seq) if seq.is_empty() => {
                out.push_str(&format!("{key_name}: []\n"));
            }
            Value::Sequence(seq) => {
                let mut items = seq.clone();
                if style.sort_sequences {
                    items.sort_by(compare);
                }
                out.push_str(&format!("{key_name}:\n"));
                let lead = format!("{}- ", " ".repeat(style.sequence_offset));
                for item in &items {
                    push_scalar(&mut out, &lead, &key_name, item, style.sequence_offset + 2)?;
                }
            }
            Value::Mapping(nested) if nested.is_empty() => {
                out.push_str(&format!("{key_name}: {{}}\n"));
            }
            Value::Mapping(nested) => {
                out.push_str(&format!("{key_name}:\n"));
                for (sub_key, sub_value) in nested {
                    let sub_name = render_scalar(&key_name, sub_key)?;
                    let lead = format!("{}{}: ", " ".repeat(style.mapping_indent), sub_name);
                    push_scalar(
                        &mut out,
                        &lead,
                        &key_name,
                        sub_value,
                        style.mapping_indent * 2,
                    )?;
                }
            }
            scalar => {
                let lead = format!("{key_name}: ");
                push_scalar(&mut out, &lead, &key_name, scalar, style.mapping_indent)?;
            }
        }
    }
    Ok(out)
}
