use super::{TextRewrite, lines_with_fence_state, map_outside_inline_code};
use crate::utils::regex_cache::SPACED_STRONG_REGEX;

/// Removes whitespace just inside strong-emphasis markers: `** text **` becomes `**text**`.
#[derive(Debug, Default, Clone)]
pub struct StrongSpacing;

impl StrongSpacing {
    /// Replace until stable so adjacent spans that share whitespace are all fixed.
    fn tighten_segment(segment: &str) -> Option<String> {
        let mut current = segment.to_string();
        loop {
            let next = SPACED_STRONG_REGEX.replace_all(&current, "**$1**");
            if next == current {
                break;
            }
            current = next.into_owned();
        }
        (current != segment).then_some(current)
    }
}

impl TextRewrite for StrongSpacing {
    fn name(&self) -> &'static str {
        "strong-spacing"
    }

    fn description(&self) -> &'static str {
        "Remove spaces inside `**strong**` markers"
    }

    fn rewrite(&self, content: &str) -> Option<String> {
        if !content.contains("**") {
            return None;
        }

        let mut changed = false;
        let mut out = String::with_capacity(content.len());

        for (line, is_code) in lines_with_fence_state(content) {
            if is_code {
                out.push_str(line);
                continue;
            }
            match map_outside_inline_code(line, Self::tighten_segment) {
                Some(tightened) => {
                    changed = true;
                    out.push_str(&tightened);
                }
                None => out.push_str(line),
            }
        }

        changed.then_some(out)
    }
}
