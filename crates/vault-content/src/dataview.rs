//! LIMIT-clause injection for dataview query blocks
//!
//! Large vaults render slowly when dataview queries are unbounded; this
//! transform appends a `LIMIT n` clause to every fenced ```dataview block
//! that does not already carry one.

use std::sync::LazyLock;

use regex::Regex;

static START_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```\s*dataview\s*$").unwrap());
static END_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^```\s*$").unwrap());
static LIMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blimit\s+\d+\b").unwrap());

/// Insert `LIMIT <limit>` before the closing fence of every dataview block
/// lacking one.
///
/// Returns `Some(new_text)` when at least one block was amended, `None` when
/// the text already satisfies the limit everywhere.
pub fn add_limits(text: &str, limit: u32) -> Option<String> {
    let mut in_block = false;
    let mut limit_found = false;
    let mut modified = false;
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if !in_block && START_BLOCK_RE.is_match(trimmed) {
            in_block = true;
            limit_found = false;
        } else if in_block {
            if END_BLOCK_RE.is_match(trimmed) {
                if !limit_found {
                    out.push_str(&format!("LIMIT {limit}\n"));
                    modified = true;
                }
                in_block = false;
            } else if LIMIT_RE.is_match(trimmed) {
                limit_found = true;
            }
        }
        out.push_str(line);
    }

    modified.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn limit_is_inserted_before_closing_fence() {
        let text = "```dataview\nTABLE file.name\n```\n";
        assert_eq!(
            add_limits(text, 1000).as_deref(),
            Some("```dataview\nTABLE file.name\nLIMIT 1000\n```\n")
        );
    }

    #[test]
    fn existing_limit_is_respected() {
        let text = "```dataview\nLIST\nLIMIT 50\n```\n";
        assert_eq!(add_limits(text, 1000), None);
    }

    #[test]
    fn limit_clause_is_case_insensitive() {
        let text = "```dataview\nLIST\nlimit 50\n```\n";
        assert_eq!(add_limits(text, 1000), None);
    }

    #[test]
    fn non_dataview_fences_are_untouched() {
        let text = "```rust\nfn main() {}\n```\n";
        assert_eq!(add_limits(text, 1000), None);
    }

    #[test]
    fn multiple_blocks_handled_independently() {
        let text = "```dataview\nLIST\n```\n\n```dataview\nLIST\nLIMIT 5\n```\n";
        let out = add_limits(text, 10).unwrap();
        assert_eq!(
            out,
            "```dataview\nLIST\nLIMIT 10\n```\n\n```dataview\nLIST\nLIMIT 5\n```\n"
        );
    }

    #[test]
    fn prose_mentioning_limit_outside_blocks_is_ignored() {
        let text = "The limit 10 rule applies.\n";
        assert_eq!(add_limits(text, 10), None);
    }
}
