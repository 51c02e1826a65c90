use crate::utils::is_blank_line;
use crate::utils::regex_cache::{HEADING_REGEX, IMAGE_LINE_REGEX, INDENTED_UL_ITEM_REGEX};

use super::types::LineKind;

/// Tag a single line. `is_toggle` comes from the fence scan.
///
/// Precedence: fence toggle, heading, indented list item, blank, plain. Table rows are flagged
/// separately by [`is_table_row`].
pub(super) fn classify_line(line: &str, is_toggle: bool) -> LineKind {
    if is_toggle {
        return LineKind::FenceToggle;
    }

    if let Some(level) = heading_level(line) {
        return LineKind::Heading { level };
    }

    if let Some(indent) = list_indent(line) {
        return LineKind::ListItem { indent };
    }

    if is_blank_line(line) {
        LineKind::Blank
    } else {
        LineKind::Plain
    }
}

/// Level of an ATX heading line, if it is one
pub fn heading_level(line: &str) -> Option<usize> {
    HEADING_REGEX.captures(line).map(|caps| caps[1].len())
}

/// Title text of an ATX heading line, trimmed
pub fn heading_title(line: &str) -> Option<&str> {
    HEADING_REGEX
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
}

/// Width of the leading whitespace before an unordered list marker, in characters
pub fn list_indent(line: &str) -> Option<usize> {
    INDENTED_UL_ITEM_REGEX
        .captures(line)
        .map(|caps| caps[1].chars().count())
}

/// Pipe-table heuristic: a `|` somewhere, but not an image line and not raw HTML
pub fn is_table_row(line: &str) -> bool {
    if !line.contains('|') {
        return false;
    }
    let trimmed = line.trim();
    !IMAGE_LINE_REGEX.is_match(trimmed) && !trimmed.starts_with('<')
}
