/// Structural tag assigned to every line by the classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens or closes a fenced code block
    FenceToggle,
    /// ATX heading with its level (number of leading `#`)
    Heading { level: usize },
    /// Unordered list item preceded by whitespace
    ListItem { indent: usize },
    /// Empty or whitespace-only line
    Blank,
    /// Anything else
    Plain,
}

/// Pre-computed information about a line
#[derive(Debug, Clone)]
pub struct LineInfo {
    /// 1-based line number
    pub line_num: usize,
    /// Byte offset where this line starts in the document
    pub byte_offset: usize,
    /// Length of the line in bytes (without newline)
    pub byte_len: usize,
    /// Whether the line is blank (empty or only whitespace)
    pub is_blank: bool,
    /// Whether this line is inside a fenced code block (state before a toggle line)
    pub in_code_block: bool,
    pub kind: LineKind,
    /// Matches the pipe-table heuristic. Independent of `kind`: headings and list items can be rows too.
    pub is_table_row: bool,
}

impl LineInfo {
    /// Get the line content as a string slice from the source document
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        &source[self.byte_offset..self.byte_offset + self.byte_len]
    }

    /// Lines that fence-aware rules must leave alone: fenced content and the fence lines themselves
    pub fn is_code(&self) -> bool {
        self.in_code_block || self.kind == LineKind::FenceToggle
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading { .. })
    }
}
