//! Per-file checking, fixing and rewriting.
//!
//! Every function here processes files sequentially and keeps going after a per-file failure.
//! Failures are printed to stderr and counted; the caller turns the counts into an exit code.

use colored::*;
use docstrict_lib::document::{FixError, read_document, rewrite_in_place};
use docstrict_lib::output::{OutputFormatter, format_all_warnings_as_json};
use docstrict_lib::rewrites::TextRewrite;
use docstrict_lib::rule::{LintWarning, Rule};
use docstrict_lib::utils::{LineEnding, detect_line_ending_enum};
use docstrict_lib::{fix_structure, lint};
use std::path::{Path, PathBuf};

use super::discovery::to_display_path;

/// Totals for one run over a file list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub total_warnings: usize,
    /// Files that changed, or would change in a dry run
    pub changed_files: Vec<String>,
    pub file_errors: usize,
}

fn report_file_error(err: &FixError) {
    eprintln!("{}: {err}", "Error".red().bold());
}

/// Lint one file and return its warnings
pub fn check_file(path: &Path, rules: &[Box<dyn Rule>]) -> Result<Vec<LintWarning>, String> {
    let content = read_document(path).map_err(|e| e.to_string())?;
    Ok(lint(&content, rules))
}

/// Check every file, printing violations with `formatter`.
///
/// Text output prints `OK` when the whole run is clean. JSON output prints a single array.
pub fn check_files(files: &[PathBuf], rules: &[Box<dyn Rule>], formatter: &dyn OutputFormatter) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut collected: Vec<(String, Vec<LintWarning>)> = Vec::new();

    for path in files {
        let display_path = to_display_path(path);
        match check_file(path, rules) {
            Ok(warnings) => {
                summary.files_processed += 1;
                summary.total_warnings += warnings.len();
                if formatter.collects_all() {
                    collected.push((display_path, warnings));
                } else if !warnings.is_empty() {
                    print!("{}", formatter.format_warnings(&warnings, &display_path));
                }
            }
            Err(msg) => {
                summary.file_errors += 1;
                eprintln!("{}: {msg}", "Error".red().bold());
            }
        }
    }

    if formatter.collects_all() {
        println!("{}", format_all_warnings_as_json(&collected));
    } else if summary.total_warnings == 0 && summary.file_errors == 0 {
        println!("{}", "OK".green());
    }

    summary
}

/// Apply the structural fixer to every file.
pub fn fix_files(files: &[PathBuf], dry_run: bool) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in files {
        let result = rewrite_in_place(path, dry_run, |content| {
            let line_ending = detect_line_ending_enum(content);
            if line_ending != LineEnding::Lf {
                log::debug!("Normalizing {line_ending:?} line endings in {}", path.display());
            }
            let fixed = fix_structure(content);
            (fixed != content).then_some(fixed)
        });

        match result {
            Ok(changed) => {
                summary.files_processed += 1;
                if changed {
                    summary.changed_files.push(to_display_path(path));
                }
            }
            Err(err) => {
                summary.file_errors += 1;
                report_file_error(&err);
            }
        }
    }

    print_fix_report(&summary, dry_run);
    summary
}

fn print_fix_report(summary: &RunSummary, dry_run: bool) {
    let label = if dry_run { "Would fix files:" } else { "Fixed files:" };
    println!("{} {}", label.bold(), summary.changed_files.len());
    for path in &summary.changed_files {
        println!("{path}");
    }
    if summary.changed_files.is_empty() {
        println!("No files needed changes.");
    }
}

/// Apply a single text rewrite to every file.
pub fn rewrite_files(files: &[PathBuf], rewrite: &dyn TextRewrite, dry_run: bool) -> RunSummary {
    let mut summary = RunSummary::default();
    log::debug!("Running {} ({})", rewrite.name(), rewrite.description());

    for path in files {
        match rewrite_in_place(path, dry_run, |content| rewrite.rewrite(content)) {
            Ok(changed) => {
                summary.files_processed += 1;
                if changed {
                    summary.changed_files.push(to_display_path(path));
                }
            }
            Err(err) => {
                summary.file_errors += 1;
                report_file_error(&err);
            }
        }
    }

    let label = if dry_run { "Files that would be modified:" } else { "Files modified:" };
    println!("{} {}", label.bold(), summary.changed_files.len());
    for path in &summary.changed_files {
        println!(" - {path}");
    }

    summary
}
