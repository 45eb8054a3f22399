//! Rich-text document codec.
//!
//! Translates one formatted document between three representations:
//!
//! - the editing surface's insert-only operation stream ([`DeltaOp`])
//! - HTML for display and exchange
//! - a compact JSON document tree for storage ([`Document`])
//!
//! Both ingestion paths normalize into lines that a single block segmenter
//! groups into segments. Inline styles travel as summed bit weights over
//! character ranges and are rebuilt into nested markup through a closed tag
//! table on output.
//!
//! # Example
//!
//! ```
//! let json = quire::html_to_json("<p><strong>bold <em>italic</em></strong></p>").unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"document":[{"e":"par","c":[{"e":"text","t":"bold italic","f":[[1,0,4],[3,5,6]]}]}]}"#
//! );
//!
//! let html = quire::json_to_html(&json).unwrap();
//! assert_eq!(html, "<p><strong>bold <em>italic</em></strong></p>");
//! ```

mod codec;
mod error;

pub use codec::Codec;
pub use error::CodecError;

pub use quire_blocks::{Run, RunKind, runs, segment};
pub use quire_config::{CodecConfig, ConfigError, HtmlConfig, ImageConfig, SpoilerConfig};
pub use quire_delta::{DeltaError, DeltaOp, parse_ops};
pub use quire_html::HtmlError;
pub use quire_inline::{build_ranges, decode_weight, encode_weight};
pub use quire_model::{
    BlockAttr, Chunk, Document, FormatRange, ImageRef, InlineStyle, Line, ModelError, Segment,
    StyleSet, ValidationError,
};

use std::collections::HashMap;

/// Parse an HTML fragment with the default configuration.
///
/// # Errors
///
/// See [`Codec::html_to_document`].
pub fn html_to_document(html: &str) -> Result<Document, CodecError> {
    Codec::default().html_to_document(html)
}

/// Render a document as HTML with the default configuration.
///
/// # Errors
///
/// See [`Codec::document_to_html`].
pub fn document_to_html(document: &Document) -> Result<String, CodecError> {
    Codec::default().document_to_html(document)
}

/// Convert an HTML fragment to document JSON with the default configuration.
///
/// # Errors
///
/// See [`Codec::html_to_json`].
pub fn html_to_json(html: &str) -> Result<String, CodecError> {
    Codec::default().html_to_json(html)
}

/// Render document JSON as HTML with the default configuration.
///
/// # Errors
///
/// See [`Codec::json_to_html`].
pub fn json_to_html(json: &str) -> Result<String, CodecError> {
    Codec::default().json_to_html(json)
}

/// Build a document from an operation stream with the default configuration.
#[must_use]
pub fn delta_to_document(ops: &[DeltaOp], assets: &HashMap<String, String>) -> Document {
    Codec::default().delta_to_document(ops, assets)
}
