//! Weighted format ranges.

use serde::{Deserialize, Serialize};

/// Contiguous span of a text segment sharing one combined inline-style weight.
///
/// Serialized as a `[weight, start, length]` array. `start` and `length` count
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, usize, usize)", into = "(u32, usize, usize)")]
pub struct FormatRange {
    /// Sum of the style bits active over the span.
    pub weight: u32,
    /// First character index.
    pub start: usize,
    /// Number of characters.
    pub length: usize,
}

impl FormatRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(weight: u32, start: usize, length: usize) -> Self {
        Self {
            weight,
            start,
            length,
        }
    }

    /// Character index one past the end of the range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }
}

impl From<(u32, usize, usize)> for FormatRange {
    fn from((weight, start, length): (u32, usize, usize)) -> Self {
        Self::new(weight, start, length)
    }
}

impl From<FormatRange> for (u32, usize, usize) {
    fn from(range: FormatRange) -> Self {
        (range.weight, range.start, range.length)
    }
}
