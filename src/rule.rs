//!
//! This module defines the Rule trait and related types for implementing structural rules in docstrict.
//! Includes the warning type and dynamic dispatch helpers.

use dyn_clone::DynClone;

use crate::lint_context::LintContext;

/// A single reported instance of a document failing one structural rule.
///
/// `line` is 1-based. File-level findings (empty file, trailing newline) carry no line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LintWarning {
    pub rule_name: &'static str,
    pub message: String,
    pub line: Option<usize>,
}

impl LintWarning {
    pub fn at_line(rule_name: &'static str, message: impl Into<String>, line: usize) -> Self {
        Self {
            rule_name,
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn file_level(rule_name: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule_name,
            message: message.into(),
            line: None,
        }
    }
}

pub trait Rule: DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn check(&self, ctx: &LintContext) -> Vec<LintWarning>;

    /// Check if this rule should quickly skip processing based on content
    fn should_skip(&self, _ctx: &LintContext) -> bool {
        false
    }

    /// Factory: create a rule from config (if present), or use defaults.
    fn from_config(config: &crate::config::Config) -> Box<dyn Rule>
    where
        Self: Sized;
}

dyn_clone::clone_trait_object!(Rule);
