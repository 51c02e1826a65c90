//! Fence parity tracking.
//!
//! A line whose trimmed content starts with a fence marker flips the state. Fence styles are
//! not distinguished and nothing nests, so a `~~~` line closes a block opened by backticks.
//! Unbalanced markers leave the rest of the document mis-scanned; that is accepted.

/// Fence markers recognized at the start of a trimmed line
pub const FENCE_MARKERS: [&str; 2] = ["```", "~~~"];

/// Whether the scanner is currently inside a fenced code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside,
}

/// Per-line result of the fence scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceScan {
    /// State in effect before this line was consumed
    pub in_fence: bool,
    /// Whether this line itself opened or closed a fence
    pub is_toggle: bool,
}

impl FenceState {
    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }

    pub fn toggled(self) -> Self {
        match self {
            FenceState::Outside => FenceState::Inside,
            FenceState::Inside => FenceState::Outside,
        }
    }

    /// Consume one line and return the next state plus whether the line toggled.
    pub fn advance(self, line: &str) -> (Self, bool) {
        if is_fence_marker(line.trim()) {
            (self.toggled(), true)
        } else {
            (self, false)
        }
    }
}

/// Check whether already-trimmed text opens or closes a fence
#[inline]
pub fn is_fence_marker(trimmed: &str) -> bool {
    FENCE_MARKERS.iter().any(|marker| trimmed.starts_with(marker))
}

/// Fold the fence state machine over a document's lines.
pub fn scan_fences<'a, I>(lines: I) -> Vec<FenceScan>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .scan(FenceState::default(), |state, line| {
            let before = *state;
            let (next, is_toggle) = before.advance(line);
            *state = next;
            Some(FenceScan {
                in_fence: before.is_inside(),
                is_toggle,
            })
        })
        .collect()
}
