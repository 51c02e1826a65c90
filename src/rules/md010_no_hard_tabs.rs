//! Rule MD010: No hard tabs
//!
//! Every line is checked, including fenced code: tabs are disallowed in code samples too.
use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};

#[derive(Debug, Default, Clone)]
pub struct MD010NoHardTabs;

impl Rule for MD010NoHardTabs {
    fn name(&self) -> &'static str {
        "MD010"
    }

    fn description(&self) -> &'static str {
        "No hard tabs"
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintWarning> {
        let warnings = ctx
            .lines
            .iter()
            .filter(|line| line.content(ctx.content).contains('\t'))
            .map(|line| LintWarning::at_line(self.name(), "Hard tab at line", line.line_num))
            .collect();

        warnings
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !ctx.content.contains('\t')
    }

    fn from_config(_config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized,
    {
        Box::new(MD010NoHardTabs)
    }
}
