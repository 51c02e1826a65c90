//! Output formatting module for docstrict
//!
//! This module provides the output formats for checker results.

use crate::rule::LintWarning;

pub mod formatters;

// Re-export formatters
pub use formatters::*;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the warnings reported for one file
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String;

    /// Whether this formatter emits one document for the whole run instead of per-file chunks
    fn collects_all(&self) -> bool {
        false
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated `path<TAB>rule<TAB>message:line`, one violation per line
    #[default]
    Text,
    /// A single JSON array of all violations
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" | "tsv" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }

    /// Create a formatter instance for this format
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new_collecting()),
        }
    }
}
