//! Shared, pre-computed view of a document.
//!
//! The fence scan and line classification run once per document; every rule and the structural
//! fixer consume the resulting tagged lines instead of re-scanning the text.

pub mod fence_state;
pub mod line_classification;
mod types;

pub use fence_state::{FenceScan, FenceState, scan_fences};
pub use types::*;

use line_classification::{classify_line, is_table_row};

pub struct LintContext<'a> {
    /// Document text with LF line endings
    pub content: &'a str,
    pub lines: Vec<LineInfo>,
}

impl<'a> LintContext<'a> {
    /// Build the context. `content` must already be LF-normalized.
    ///
    /// The document is split on every `\n`, so text ending in a terminator has a final empty line.
    pub fn new(content: &'a str) -> Self {
        let raw_lines: Vec<&str> = content.split('\n').collect();
        let scans = scan_fences(raw_lines.iter().copied());

        let mut lines = Vec::with_capacity(raw_lines.len());
        let mut byte_offset = 0;
        for (idx, (line, scan)) in raw_lines.iter().zip(scans).enumerate() {
            lines.push(LineInfo {
                line_num: idx + 1,
                byte_offset,
                byte_len: line.len(),
                is_blank: line.trim().is_empty(),
                in_code_block: scan.in_fence,
                kind: classify_line(line, scan.is_toggle),
                is_table_row: !scan.is_toggle && is_table_row(line),
            });
            byte_offset += line.len() + 1;
        }

        Self { content, lines }
    }

    /// Content of the line at a 0-based index
    pub fn line_content(&self, idx: usize) -> &'a str {
        self.lines[idx].content(self.content)
    }

    /// Previous line (0-based index) if any
    pub fn prev_line(&self, idx: usize) -> Option<&'a str> {
        idx.checked_sub(1).map(|prev| self.line_content(prev))
    }

    /// Next line (0-based index) if any
    pub fn next_line(&self, idx: usize) -> Option<&'a str> {
        (idx + 1 < self.lines.len()).then(|| self.line_content(idx + 1))
    }

    /// First non-blank line outside fenced code, skipping fence lines themselves
    pub fn first_content_line(&self) -> Option<&LineInfo> {
        self.lines.iter().find(|line| !line.is_code() && !line.is_blank)
    }
}
