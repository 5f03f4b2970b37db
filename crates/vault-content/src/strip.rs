//! Removal of a single leading frontmatter block

/// Strip a leading delimited frontmatter block from *text*.
///
/// Returns `Some(body)` when the text starts with a `---` line and a closing
/// `---` line is found, where `body` is everything after the closing
/// delimiter. Returns `None` when there is nothing to strip (no leading
/// delimiter, or an unterminated block).
pub fn strip_frontmatter(text: &str) -> Option<&str> {
    if !text.trim_start().starts_with("---") {
        return None;
    }

    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim() != "---" {
        return None;
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim() == "---" {
            return Some(&text[offset..]);
        }
    }
    None
}
