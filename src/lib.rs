pub mod config;
pub mod document;
pub mod exit_codes;
pub mod lint_context;
pub mod output;
pub mod rewrites;
pub mod rule;
pub mod rules;
pub mod structure_fixer;
pub mod utils;

pub use rules::*;
pub use structure_fixer::fix_structure;

pub use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};
use crate::utils::normalize_to_lf;

/// Lint a document against the given rules.
/// Assumes the provided `rules` vector contains the final, configured and filtered set of rules.
///
/// Line endings are normalized to LF first; warnings come back grouped by rule, in rule order.
pub fn lint(content: &str, rules: &[Box<dyn Rule>]) -> Vec<LintWarning> {
    let normalized = normalize_to_lf(content);
    let ctx = LintContext::new(&normalized);
    let mut warnings = Vec::new();

    for rule in rules {
        if rule.should_skip(&ctx) {
            continue;
        }

        let rule_warnings = rule.check(&ctx);
        if !rule_warnings.is_empty() {
            log::debug!("{} reported {} warning(s)", rule.name(), rule_warnings.len());
        }
        warnings.extend(rule_warnings);
    }

    warnings
}
