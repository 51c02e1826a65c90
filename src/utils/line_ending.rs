use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Cr,
    Mixed,
}

pub fn detect_line_ending_enum(content: &str) -> LineEnding {
    let crlf_count = content.matches("\r\n").count();
    let lf_count = content.matches('\n').count() - crlf_count;
    let cr_count = content.matches('\r').count() - crlf_count;

    match (crlf_count > 0, lf_count > 0, cr_count > 0) {
        (true, false, false) => LineEnding::Crlf,
        (false, false, true) => LineEnding::Cr,
        (false, _, false) => LineEnding::Lf,
        _ => LineEnding::Mixed,
    }
}

/// Convert CRLF and bare CR terminators to LF.
///
/// Borrows when the content is already LF-only.
pub fn normalize_to_lf(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending_enum() {
        assert_eq!(detect_line_ending_enum("hello\nworld"), LineEnding::Lf);
        assert_eq!(detect_line_ending_enum("hello\r\nworld"), LineEnding::Crlf);
        assert_eq!(detect_line_ending_enum("hello\rworld"), LineEnding::Cr);
        assert_eq!(detect_line_ending_enum("hello\r\nworld\nmixed"), LineEnding::Mixed);
        assert_eq!(detect_line_ending_enum("no line endings"), LineEnding::Lf);
    }

    #[test]
    fn test_normalize_to_lf() {
        assert_eq!(normalize_to_lf("hello\r\nworld\r\n"), "hello\nworld\n");
        assert_eq!(normalize_to_lf("old\rmac\r"), "old\nmac\n");
        assert_eq!(normalize_to_lf("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_normalize_borrows_lf_content() {
        assert!(matches!(normalize_to_lf("plain\ntext\n"), Cow::Borrowed(_)));
    }
}
