//! Error types for the document model.

/// Error reading or writing document JSON.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

/// Document that violates a structural invariant.
///
/// `path` lists child indices from the top-level segment down to the
/// offending segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Format range extends past the end of its text.
    #[error("format range {start}+{length} exceeds text length {text_len} at {path:?}")]
    RangeOutOfBounds {
        /// Segment path.
        path: Vec<usize>,
        /// Range start.
        start: usize,
        /// Range length.
        length: usize,
        /// Text length in characters.
        text_len: usize,
    },

    /// Format range starts before the previous one ended.
    #[error("format range at {start} overlaps previous range ending at {previous_end} at {path:?}")]
    OverlappingRanges {
        /// Segment path.
        path: Vec<usize>,
        /// End of the previous range.
        previous_end: usize,
        /// Start of the offending range.
        start: usize,
    },

    /// Header level outside 1..=6.
    #[error("header level {level} out of range at {path:?}")]
    HeaderLevel {
        /// Segment path.
        path: Vec<usize>,
        /// Offending level.
        level: u8,
    },
}
