//! Line-level text rewrites for legacy markup.
//!
//! Rewrites never touch fenced code blocks (including the fence lines) and only transform text
//! outside inline code spans. A rewrite returns `None` when the document needs no change.

mod backslash_returns;
mod strong_spacing;

pub use backslash_returns::BackslashReturns;
pub use strong_spacing::StrongSpacing;

use crate::lint_context::FenceState;
use dyn_clone::DynClone;

pub trait TextRewrite: DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn rewrite(&self, content: &str) -> Option<String>;
}

dyn_clone::clone_trait_object!(TextRewrite);

/// A line (with its terminator, if any) and whether it is fenced code or a fence marker
pub(crate) fn lines_with_fence_state(content: &str) -> impl Iterator<Item = (&str, bool)> {
    content.split_inclusive('\n').scan(FenceState::default(), |state, line| {
        let (next, is_toggle) = state.advance(line);
        let is_code = is_toggle || state.is_inside();
        *state = next;
        Some((line, is_code))
    })
}

/// Apply `transform` to the segments of `line` that are outside inline code.
///
/// Segments are delimited by backticks; odd segments are inside a code span and kept verbatim.
/// Returns `None` if no segment changed.
pub(crate) fn map_outside_inline_code<F>(line: &str, mut transform: F) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut changed = false;
    let parts: Vec<String> = line
        .split('`')
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 0 {
                if let Some(new_part) = transform(part) {
                    changed = true;
                    return new_part;
                }
            }
            part.to_string()
        })
        .collect();

    changed.then(|| parts.join("`"))
}
