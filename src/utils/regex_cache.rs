//! Cached regex patterns shared by the rules, the structural fixer and the rewriters.

use regex::Regex;
use std::sync::LazyLock;

/// ATX heading: one to six `#`, whitespace, then a non-space character
pub static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(\S.*)$").unwrap());

/// Top-level heading as required on the first non-blank line
pub static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+\S").unwrap());

/// Indented unordered list item (`*` or `-`); group 1 is the indentation
pub static INDENTED_UL_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s+)[*-]\s+").unwrap());

/// Trimmed line that starts with an image or link-wrapped image
pub static IMAGE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^!\[.*\]\(.*\)").unwrap());

/// Two or more consecutive backslashes used as a legacy hard-return marker
pub static BACKSLASH_RETURN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\{2,}").unwrap());

/// Strong emphasis padded with whitespace inside the markers, e.g. `** text **`
pub static SPACED_STRONG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\s+([^*]+?)\s+\*\*").unwrap());

/// Three or more consecutive newlines
pub static MULTIPLE_BLANK_LINES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Quick check before running heading regexes
pub fn has_heading_markers(content: &str) -> bool {
    content.contains('#')
}

/// Quick check before running table detection
pub fn has_table_markers(content: &str) -> bool {
    content.contains('|')
}
