//! Top-level document and its JSON form.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ValidationError};
use crate::segment::Segment;

/// Ordered sequence of top-level segments.
///
/// Serialized as `{"document": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level segments.
    #[serde(rename = "document", default)]
    pub segments: Vec<Segment>,
}

impl Document {
    /// Create a document from top-level segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse document JSON.
    ///
    /// Accepts the `{"document": [...]}` envelope as well as a bare segment
    /// array.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        if json.trim_start().starts_with('[') {
            let segments: Vec<Segment> = serde_json::from_str(json)?;
            return Ok(Self::new(segments));
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact document JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether the document has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check structural invariants.
    ///
    /// Every text segment's format ranges must lie within its text, be sorted
    /// by start and not overlap. Header levels must be 1-6.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut path = Vec::new();
        for (index, segment) in self.segments.iter().enumerate() {
            path.push(index);
            validate_segment(segment, &mut path)?;
            path.pop();
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Document {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

fn validate_segment(segment: &Segment, path: &mut Vec<usize>) -> Result<(), ValidationError> {
    match segment {
        Segment::Text { text, formats } => {
            let text_len = text.chars().count();
            let mut previous_end = 0;
            for range in formats {
                if range.start < previous_end {
                    return Err(ValidationError::OverlappingRanges {
                        path: path.clone(),
                        previous_end,
                        start: range.start,
                    });
                }
                if range.end() > text_len {
                    return Err(ValidationError::RangeOutOfBounds {
                        path: path.clone(),
                        start: range.start,
                        length: range.length,
                        text_len,
                    });
                }
                previous_end = range.end();
            }
        }
        Segment::Header { level, .. } if !(1..=6).contains(level) => {
            return Err(ValidationError::HeaderLevel {
                path: path.clone(),
                level: *level,
            });
        }
        _ => {}
    }

    for (index, child) in segment.children().iter().enumerate() {
        path.push(index);
        validate_segment(child, path)?;
        path.pop();
    }
    Ok(())
}
