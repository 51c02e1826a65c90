//! Default tab-separated output formatter

use crate::output::OutputFormatter;
use crate::rule::LintWarning;

/// One violation per line: `path<TAB>rule<TAB>message:line`.
///
/// File-level violations leave the line number empty, so the line ends with a bare `:`.
#[derive(Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for TextFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        let mut output = String::new();

        for warning in warnings {
            let line = warning.line.map(|n| n.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "{file_path}\t{}\t{}:{line}\n",
                warning.rule_name, warning.message
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_warning() {
        let warnings = vec![LintWarning::at_line("MD010", "Hard tab at line", 5)];
        let output = TextFormatter::new().format_warnings(&warnings, "docs/a.md");
        assert_eq!(output, "docs/a.md\tMD010\tHard tab at line:5\n");
    }

    #[test]
    fn test_format_file_level_warning() {
        let warnings = vec![LintWarning::file_level("MD047", "File does not end with a single newline")];
        let output = TextFormatter::new().format_warnings(&warnings, "docs/a.md");
        assert_eq!(output, "docs/a.md\tMD047\tFile does not end with a single newline:\n");
    }

    #[test]
    fn test_format_preserves_order() {
        let warnings = vec![
            LintWarning::at_line("MD022", "No blank line before heading", 3),
            LintWarning::at_line("MD022", "No blank line after heading", 3),
        ];
        let output = TextFormatter::new().format_warnings(&warnings, "x.md");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "x.md\tMD022\tNo blank line before heading:3",
                "x.md\tMD022\tNo blank line after heading:3",
            ]
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(TextFormatter::new().format_warnings(&[], "x.md"), "");
    }
}
