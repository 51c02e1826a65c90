pub mod atomic_write;
pub mod line_ending;
pub mod regex_cache;

pub use atomic_write::write_atomic;
pub use line_ending::{LineEnding, detect_line_ending_enum, normalize_to_lf};

/// Check if a line is blank (empty or whitespace only)
#[inline]
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}
