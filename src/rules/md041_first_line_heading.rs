use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};
use crate::utils::regex_cache::H1_REGEX;

/// Rule MD041: First non-blank line in file should be a top-level heading
///
/// Blank lines and fenced code blocks before the first content line are skipped.
#[derive(Debug, Default, Clone)]
pub struct MD041FirstLineHeading;

impl Rule for MD041FirstLineHeading {
    fn name(&self) -> &'static str {
        "MD041"
    }

    fn description(&self) -> &'static str {
        "First non-blank line should be a top-level heading"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let Some(first) = ctx.first_content_line() else {
            return vec![LintWarning::file_level(self.name(), "File is empty")];
        };

        if H1_REGEX.is_match(first.content(ctx.content)) {
            return Vec::new();
        }

        vec![LintWarning::at_line(
            self.name(),
            "First non-blank line is not H1",
            first.line_num,
        )]
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD041FirstLineHeading)
    }
}
