use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};
use crate::utils::is_blank_line;
use crate::utils::regex_cache::has_table_markers;

/// Rule MD058: Blanks around tables
///
/// Ensures tables have blank lines before and after them. Every table row is checked against
/// its neighbors; a neighbor that itself contains `|` is treated as part of the same block.
#[derive(Debug, Default, Clone)]
pub struct MD058BlanksAroundTables;

impl MD058BlanksAroundTables {
    /// Neighbor that breaks the table block without a separating blank line
    fn is_adjacent_text(neighbor: Option<&str>) -> bool {
        neighbor.is_some_and(|line| !is_blank_line(line) && !line.contains('|'))
    }
}

impl Rule for MD058BlanksAroundTables {
    fn name(&self) -> &'static str {
        "MD058"
    }

    fn description(&self) -> &'static str {
        "Tables should be surrounded by blank lines"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let mut warnings = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            if !line.is_table_row || line.is_code() {
                continue;
            }

            if Self::is_adjacent_text(ctx.prev_line(idx)) {
                warnings.push(LintWarning::at_line(
                    self.name(),
                    "No blank line before table",
                    line.line_num,
                ));
            }

            if Self::is_adjacent_text(ctx.next_line(idx)) {
                warnings.push(LintWarning::at_line(
                    self.name(),
                    "No blank line after table",
                    line.line_num,
                ));
            }
        }

        warnings
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !has_table_markers(ctx.content)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD058BlanksAroundTables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<LintWarning> {
        let ctx = LintContext::new(content);
        MD058BlanksAroundTables.check(&ctx)
    }

    #[test]
    fn test_proper_blank_lines() {
        let content = "# Title\n\nText before.\n\n| A | B |\n| - | - |\n| 1 | 2 |\n\nText after.\n";
        assert!(check(content).is_empty());
    }

    #[test]
    fn test_missing_blank_lines_around_table() {
        let result = check("Intro\n| a | b |\n| - | - |\nMore text\n");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].message, "No blank line before table");
        assert_eq!(result[0].line, Some(2));
        assert_eq!(result[1].message, "No blank line after table");
        assert_eq!(result[1].line, Some(3));
    }

    #[test]
    fn test_table_at_file_edges() {
        assert!(check("| a | b |\n| - | - |").is_empty());
    }

    #[test]
    fn test_pipes_in_fence_never_reported() {
        let content = "# Title\n\n```\ntext\n| not | a table |\ntext\n```\n";
        assert!(check(content).is_empty());
    }

    #[test]
    fn test_image_and_html_lines_are_not_tables() {
        let content = "Text\n![a|b](img.png)\n<span>a|b</span>\nText\n";
        assert!(check(content).is_empty());
    }

    #[test]
    fn test_list_item_with_pipe_is_a_row() {
        let result = check("# T\n\nText\n  - a | b\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "No blank line before table");
        assert_eq!(result[0].line, Some(4));
    }

    #[test]
    fn test_heading_with_pipe_is_a_row() {
        let result = check("# T\n\nText\n\n## A | B\nmore\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "No blank line after table");
        assert_eq!(result[0].line, Some(5));
    }

    #[test]
    fn test_fence_toggle_with_pipe() {
        // The toggle is neither a row nor adjacent text for the row above it
        let result = check("# T\n\nText\n| a |\n```|\ncode\n```\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "No blank line before table");
        assert_eq!(result[0].line, Some(4));
    }

    #[test]
    fn test_neighbor_with_pipe_is_not_text() {
        // The image line contains a pipe, so the row above does not count it as adjacent text
        let content = "\n| a |\n![x|y](img.png)\n";
        assert!(check(content).is_empty());
    }
}
