//! Mutating counterpart of the structural rules.
//!
//! The fixer is conservative: it only trims trailing blank lines, promotes an existing first
//! heading to level 1 and inserts blank lines around headings and table blocks outside fenced
//! code. It never invents content.

use std::borrow::Cow;

use crate::lint_context::{LineKind, LintContext};
use crate::lint_context::line_classification::heading_title;
use crate::utils::{is_blank_line, normalize_to_lf};

/// Apply every structural fix to a document and return the new text.
///
/// Line endings are normalized to LF and the result always ends with exactly one `\n`.
pub fn fix_structure(content: &str) -> String {
    let normalized = normalize_to_lf(content);

    let mut raw_lines: Vec<&str> = normalized.split('\n').collect();
    while raw_lines.last().is_some_and(|line| is_blank_line(line)) {
        raw_lines.pop();
    }
    let body = raw_lines.join("\n");

    let ctx = LintContext::new(&body);
    let mut lines: Vec<Cow<'_, str>> = (0..ctx.lines.len()).map(|i| Cow::Borrowed(ctx.line_content(i))).collect();

    if let Some(idx) = promoted_heading_index(&ctx) {
        let promoted = heading_title(&lines[idx]).map(|title| format!("# {title}"));
        if let Some(promoted) = promoted {
            log::debug!("Promoting first heading on line {} to H1", idx + 1);
            lines[idx] = Cow::Owned(promoted);
        }
    }

    let out = reflow_blank_lines(&ctx, &lines);

    let mut result = out.join("\n");
    result.truncate(result.trim_end_matches('\n').len());
    result.push('\n');
    result
}

/// Index of the first non-blank line when it is a heading deeper than level 1
fn promoted_heading_index(ctx: &LintContext) -> Option<usize> {
    let idx = ctx.lines.iter().position(|line| !line.is_blank)?;
    match ctx.lines[idx].kind {
        LineKind::Heading { level } if level > 1 => Some(idx),
        _ => None,
    }
}

/// Re-emit the document, inserting blank lines around headings and table blocks.
fn reflow_blank_lines<'a>(ctx: &LintContext, lines: &'a [Cow<'a, str>]) -> Vec<&'a str> {
    let n = lines.len();
    let mut out: Vec<&str> = Vec::with_capacity(n + n / 4);
    let is_next_text = |idx: usize| idx < n && !is_blank_line(&lines[idx]);

    let mut i = 0;
    while i < n {
        let info = &ctx.lines[i];
        if info.is_code() {
            out.push(lines[i].as_ref());
            i += 1;
            continue;
        }

        // A heading with a pipe in it is handled as a heading
        if info.is_heading() {
            push_separator(&mut out);
            out.push(lines[i].as_ref());
            if is_next_text(i + 1) {
                out.push("");
            }
            i += 1;
        } else if info.is_table_row {
            let end = table_block_end(ctx, lines, i);
            push_separator(&mut out);
            out.extend(lines[i..end].iter().map(|line| line.as_ref()));
            if is_next_text(end) {
                out.push("");
            }
            i = end;
        } else {
            out.push(lines[i].as_ref());
            i += 1;
        }
    }

    out
}

/// Exclusive end of the table block starting at `start`: every following line containing `|`.
///
/// This differs from a plain maximal run of `|` lines: a fence toggle ends the block even when it
/// contains `|` (```` ```| ````), and the toggle then opens or closes its fence as usual.
fn table_block_end(ctx: &LintContext, lines: &[Cow<'_, str>], start: usize) -> usize {
    let mut end = start;
    while end < lines.len() && lines[end].contains('|') && ctx.lines[end].kind != LineKind::FenceToggle {
        end += 1;
    }
    end
}

/// Insert a blank line unless the output is empty or already ends with one
fn push_separator(out: &mut Vec<&str>) {
    if out.last().is_some_and(|last| !is_blank_line(last)) {
        out.push("");
    }
}
