use std::ops::Range;

use serde::Serialize;

/// A resolved half-open char range `[start, end)` into a specific text body.
///
/// Only the engine creates positions directly, and it guarantees
/// `start <= end <= len(body)`. Outside the crate use [`Position::within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    start: usize,
    end: usize,
}

impl Position {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted position {start}..{end}");
        Self { start, end }
    }

    /// Builds a position, rejecting ranges that are inverted or run past
    /// `body_len`.
    pub fn within(start: usize, end: usize, body_len: usize) -> Option<Self> {
        (start <= end && end <= body_len).then_some(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(self) -> usize {
        self.end
    }

    /// Length in chars.
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}
