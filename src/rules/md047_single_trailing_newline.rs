use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};

/// Rule MD047: File should end with a single newline
///
/// Operates on the LF-normalized text. Missing and repeated terminators are mutually exclusive.
#[derive(Debug, Default, Clone)]
pub struct MD047SingleTrailingNewline;

impl Rule for MD047SingleTrailingNewline {
    fn name(&self) -> &'static str {
        "MD047"
    }

    fn description(&self) -> &'static str {
        "Files should end with a single newline character"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let content = ctx.content;

        let message = if !content.ends_with('\n') {
            "File does not end with a single newline"
        } else if content.ends_with("\n\n") {
            "File ends with multiple trailing newlines"
        } else {
            return Vec::new();
        };

        vec![LintWarning::file_level(self.name(), message)]
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD047SingleTrailingNewline)
    }
}
