//! Implicit-null guard for candidate frontmatter blocks
//!
//! A line such as `Question:` followed by a blank line parses as a mapping
//! whose value is null, but that shape is almost always prose (flashcard
//! questions, outline headings) rather than metadata. A chunk only counts as
//! frontmatter if every null-valued key was written as an explicit
//! `key: null` or `key: ~` line.

use regex::Regex;
use serde_yaml::Mapping;

use crate::value::key_text;

/// Check whether *mapping* contains a key whose null value was implicit in
/// the raw chunk text.
///
/// Returns `true` when at least one null-valued key has no matching explicit
/// `null`/`~` line, in which case the chunk must be rejected as metadata.
pub fn has_implicit_null(raw: &str, mapping: &Mapping) -> bool {
    for (key, value) in mapping {
        if !value.is_null() {
            continue;
        }
        let pattern = format!(
            r"(?i)^\s*{}\s*:\s*(?:null|~)\s*$",
            regex::escape(&key_text(key))
        );
        let Ok(re) = Regex::new(&pattern) else {
            return true;
        };
        if !raw.lines().any(|line| re.is_match(line)) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;

    fn mapping_of(yaml: &str) -> Mapping {
        match serde_yaml::from_str(yaml).unwrap() {
            Value::Mapping(m) => m,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn bare_key_is_implicit() {
        let raw = "question:\n";
        assert!(has_implicit_null(raw, &mapping_of(raw)));
    }

    #[test]
    fn explicit_null_literal_passes() {
        let raw = "question: null\n";
        assert!(!has_implicit_null(raw, &mapping_of(raw)));
    }

    #[test]
    fn explicit_tilde_passes() {
        let raw = "question: ~\n";
        assert!(!has_implicit_null(raw, &mapping_of(raw)));
    }

    #[test]
    fn explicit_null_is_case_insensitive() {
        let raw = "question: NULL\n";
        assert!(!has_implicit_null(raw, &mapping_of(raw)));
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        let raw = "  question :  null  \n";
        let mapping = mapping_of("question: null");
        assert!(!has_implicit_null(raw, &mapping));
    }

    #[test]
    fn non_null_values_are_ignored() {
        let raw = "title: My Note\ntags:\n  - a\n";
        assert!(!has_implicit_null(raw, &mapping_of(raw)));
    }

    #[test]
    fn one_implicit_among_explicit_fails() {
        let raw = "a: null\nb:\n";
        assert!(has_implicit_null(raw, &mapping_of(raw)));
    }
}
