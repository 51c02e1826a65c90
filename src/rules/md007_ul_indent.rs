use crate::config::get_rule_config_value;
use crate::lint_context::{LineKind, LintContext};
use crate::rule::{LintWarning, Rule};

/// Rule MD007: Unordered list indentation
///
/// Nested `*`/`-` items must be indented by a multiple of `indent` (2 by default).
/// Fenced code is not exempt.
#[derive(Debug, Clone)]
pub struct MD007ULIndent {
    pub indent: usize,
}

impl Default for MD007ULIndent {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl MD007ULIndent {
    pub fn new(indent: usize) -> Self {
        Self { indent: indent.max(1) }
    }
}

impl Rule for MD007ULIndent {
    fn name(&self) -> &'static str {
        "MD007"
    }

    fn description(&self) -> &'static str {
        "Unordered list indentation"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let message = if self.indent == 2 {
            "Unordered list indent not multiple of 2 spaces".to_string()
        } else {
            format!("Unordered list indent not multiple of {} spaces", self.indent)
        };

        let warnings = ctx
            .lines
            .iter()
            .filter(|line| matches!(line.kind, LineKind::ListItem { indent } if indent % self.indent != 0))
            .map(|line| LintWarning::at_line(self.name(), message.clone(), line.line_num))
            .collect();

        warnings
    }

    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        let indent = get_rule_config_value::<usize>(config, "MD007", "indent").unwrap_or(2);
        Box::new(MD007ULIndent::new(indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn check(content: &str) -> Vec<LintWarning> {
        let ctx = LintContext::new(content);
        MD007ULIndent::default().check(&ctx)
    }

    #[test]
    fn test_even_indents_are_valid() {
        assert!(check("# Title\n\n- a\n  - b\n    - c\n").is_empty());
    }

    #[test]
    fn test_odd_indent_reported() {
        let result = check("# Title\n\n- a\n   - b\n  * c\n     * d\n");
        let lines: Vec<_> = result.iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![Some(4), Some(6)]);
        assert_eq!(result[0].message, "Unordered list indent not multiple of 2 spaces");
    }

    #[test]
    fn test_plus_marker_is_ignored() {
        assert!(check("- a\n   + b\n").is_empty());
    }

    #[test]
    fn test_lists_in_fence_are_still_checked() {
        let result = check("# Title\n\n```\n   - odd in code\n```\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, Some(4));
    }

    #[test]
    fn test_configured_indent() {
        let config = Config::from_toml_str("[MD007]\nindent = 4\n").unwrap();
        let rule = MD007ULIndent::from_config(&config);
        let ctx = LintContext::new("- a\n  - b\n    - c\n");
        let result = rule.check(&ctx);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, Some(2));
        assert_eq!(result[0].message, "Unordered list indent not multiple of 4 spaces");
    }
}
