use super::{TextRewrite, lines_with_fence_state, map_outside_inline_code};
use crate::utils::regex_cache::{BACKSLASH_RETURN_REGEX, MULTIPLE_BLANK_LINES_REGEX};

/// Converts legacy hard-return markers (two or more backslashes) into real line breaks.
///
/// When a document changes, every non-fenced line is re-terminated with `\n` and runs of
/// three or more newlines are collapsed into one blank line.
#[derive(Debug, Default, Clone)]
pub struct BackslashReturns;

impl BackslashReturns {
    fn convert_segment(segment: &str) -> Option<String> {
        if !BACKSLASH_RETURN_REGEX.is_match(segment) {
            return None;
        }
        Some(BACKSLASH_RETURN_REGEX.replace_all(segment, "\n").into_owned())
    }

    /// Split a converted line into terminated lines
    fn push_terminated(out: &mut String, line: &str) {
        let body = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);
        for piece in body.split('\n') {
            out.push_str(piece);
            out.push('\n');
        }
    }
}

impl TextRewrite for BackslashReturns {
    fn name(&self) -> &'static str {
        "backslash-returns"
    }

    fn description(&self) -> &'static str {
        "Replace `\\\\` hard-return markers with line breaks"
    }

    fn rewrite(&self, content: &str) -> Option<String> {
        if !content.contains("\\\\") {
            return None;
        }

        let mut changed = false;
        let mut out = String::with_capacity(content.len());

        for (line, is_code) in lines_with_fence_state(content) {
            if is_code {
                out.push_str(line);
                continue;
            }
            match map_outside_inline_code(line, Self::convert_segment) {
                Some(converted) => {
                    changed = true;
                    Self::push_terminated(&mut out, &converted);
                }
                None => Self::push_terminated(&mut out, line),
            }
        }

        if !changed {
            return None;
        }
        Some(MULTIPLE_BLANK_LINES_REGEX.replace_all(&out, "\n\n").into_owned())
    }
}
