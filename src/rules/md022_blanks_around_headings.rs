use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};
use crate::utils::is_blank_line;
use crate::utils::regex_cache::has_heading_markers;

/// Rule MD022: Headings should be surrounded by blank lines
///
/// Headings inside fenced code are ignored. The first and last line of a file have no
/// neighbor on one side, which counts as blank.
#[derive(Debug, Default, Clone)]
pub struct MD022BlanksAroundHeadings;

impl Rule for MD022BlanksAroundHeadings {
    fn name(&self) -> &'static str {
        "MD022"
    }

    fn description(&self) -> &'static str {
        "Headings should be surrounded by blank lines"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let mut warnings = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            if !line.is_heading() || line.is_code() {
                continue;
            }

            if ctx.prev_line(idx).is_some_and(|prev| !is_blank_line(prev)) {
                warnings.push(LintWarning::at_line(
                    self.name(),
                    "No blank line before heading",
                    line.line_num,
                ));
            }

            if ctx.next_line(idx).is_some_and(|next| !is_blank_line(next)) {
                warnings.push(LintWarning::at_line(
                    self.name(),
                    "No blank line after heading",
                    line.line_num,
                ));
            }
        }

        warnings
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !has_heading_markers(ctx.content)
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD022BlanksAroundHeadings)
    }
}
