//! Error types for HTML conversion.

use quire_model::ValidationError;

/// Error parsing or generating HTML.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HtmlError {
    /// Markup could not be tokenized.
    #[error("HTML parse error")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error while decoding names or text.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Closing tag does not match the open element.
    #[error("mismatched closing tag </{found}>, expected </{expected}>")]
    MismatchedEnd {
        /// Tag of the innermost open element.
        expected: String,
        /// Tag that was closed.
        found: String,
    },

    /// Closing tag with no open element.
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    /// Element still open at end of input.
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// Nesting exceeds the configured limit.
    #[error("element nesting exceeds {limit} levels")]
    TooDeep {
        /// Configured maximum depth.
        limit: usize,
    },

    /// Document failed validation before generation.
    #[error("invalid document: {0}")]
    Validation(#[from] ValidationError),
}
