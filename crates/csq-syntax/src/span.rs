//! Text spans over source offsets.

use serde::Serialize;
use std::fmt;

/// Half-open character range `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextSpan {
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    #[inline]
    pub fn new(start: u32, end: u32) -> TextSpan {
        debug_assert!(start <= end, "span start {start} past end {end}");
        TextSpan { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `start <= position < end`.
    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        position >= self.start && position < self.end
    }

    /// `start <= position <= end`: a caret sitting right after the last
    /// character still counts as touching the span.
    #[inline]
    pub fn intersects_with_position(&self, position: u32) -> bool {
        position >= self.start && position <= self.end
    }

    #[inline]
    pub fn contains_span(&self, other: TextSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}
