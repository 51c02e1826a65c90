//! JSON output formatter

use crate::output::OutputFormatter;
use crate::rule::LintWarning;
use serde_json::{Value, json};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter {
    collect_all: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that collects all warnings into a single JSON array
    pub fn new_collecting() -> Self {
        Self { collect_all: true }
    }
}

fn warning_to_json(file_path: &str, warning: &LintWarning) -> Value {
    json!({
        "file": file_path,
        "line": warning.line,
        "rule": warning.rule_name,
        "message": warning.message,
    })
}

impl OutputFormatter for JsonFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        if self.collect_all {
            // The whole run is emitted once by format_all_warnings_as_json
            return String::new();
        }

        let json_warnings: Vec<Value> = warnings.iter().map(|w| warning_to_json(file_path, w)).collect();
        serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
    }

    fn collects_all(&self) -> bool {
        self.collect_all
    }
}

/// Helper to format all warnings from multiple files as a single JSON document
pub fn format_all_warnings_as_json(all_warnings: &[(String, Vec<LintWarning>)]) -> String {
    let json_warnings: Vec<Value> = all_warnings
        .iter()
        .flat_map(|(file_path, warnings)| warnings.iter().map(move |w| warning_to_json(file_path, w)))
        .collect();

    serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
}
