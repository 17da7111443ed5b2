//! Generated-output cleanup.
//!
//! Models sometimes wrap the whole document in a Markdown fence despite
//! being instructed not to. This strips exactly one enclosing fence pair.

/// Remove an enclosing fence artifact from generated text.
///
/// The first and last lines are dropped when the first line (trimmed)
/// equals ```` ``` ```` or, case-insensitively, ```` ```markdown ````, the
/// last line (trimmed) equals ```` ``` ````, and there are at least two
/// lines. Every other line is preserved verbatim, terminators included.
/// Single pass: nested fences are left alone.
pub fn strip_enclosing_fence(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.len() < 2 {
        return text.to_string();
    }

    let first = lines[0].trim();
    let last = lines[lines.len() - 1].trim();

    let starts_with_fence = first.eq_ignore_ascii_case("```markdown") || first == "```";
    let ends_with_fence = starts_with_fence && last == "```";

    if starts_with_fence && ends_with_fence {
        lines[1..lines.len() - 1].concat()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(strip_enclosing_fence(""), "");
    }

    #[test]
    fn tagged_fence_pair_removed() {
        assert_eq!(strip_enclosing_fence("```markdown\nBODY\n```"), "BODY\n");
    }

    #[test]
    fn bare_fence_pair_removed() {
        assert_eq!(strip_enclosing_fence("```\n# Title\ntext\n```"), "# Title\ntext\n");
    }

    #[test]
    fn fence_tag_match_is_case_insensitive() {
        assert_eq!(strip_enclosing_fence("```Markdown\nBODY\n```"), "BODY\n");
        assert_eq!(strip_enclosing_fence("```MARKDOWN\nBODY\n```"), "BODY\n");
    }

    #[test]
    fn trailing_newline_after_closing_fence_tolerated() {
        assert_eq!(strip_enclosing_fence("```markdown\nBODY\n```\n"), "BODY\n");
    }

    #[test]
    fn clean_text_unchanged() {
        let text = "# Title\n\nSome description.\n";
        assert_eq!(strip_enclosing_fence(text), text);
    }

    #[test]
    fn idempotent_on_clean_text() {
        let text = "# Title\n\nNo fences here.\n";
        let once = strip_enclosing_fence(text);
        assert_eq!(strip_enclosing_fence(&once), once);
    }

    #[test]
    fn opening_fence_without_closing_kept() {
        let text = "```markdown\nBODY\nno closing fence";
        assert_eq!(strip_enclosing_fence(text), text);
    }

    #[test]
    fn closing_fence_without_opening_kept() {
        let text = "# Title\nBODY\n```";
        assert_eq!(strip_enclosing_fence(text), text);
    }

    #[test]
    fn other_language_tag_kept() {
        let text = "```python\nprint(1)\n```";
        assert_eq!(strip_enclosing_fence(text), text);
    }

    #[test]
    fn single_fence_line_kept() {
        assert_eq!(strip_enclosing_fence("```"), "```");
    }

    #[test]
    fn only_one_enclosing_pair_removed() {
        let text = "```markdown\n```\ninner\n```\n```";
        assert_eq!(strip_enclosing_fence(text), "```\ninner\n```\n");
    }

    #[test]
    fn interior_lines_keep_their_terminators() {
        let text = "```\nline one\r\nline two\n```";
        assert_eq!(strip_enclosing_fence(text), "line one\r\nline two\n");
    }
}
