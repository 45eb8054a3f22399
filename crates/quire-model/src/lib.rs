//! Document model for Quire.
//!
//! This crate holds the types shared by every conversion path:
//! - [`Document`] / [`Segment`]: the compact JSON document tree
//! - [`FormatRange`]: a weighted inline-style span over a text segment
//! - [`Line`] / [`Chunk`] / [`BlockAttr`]: the intermediate line structure both
//!   ingestion adapters produce and the block segmenter consumes
//! - [`InlineStyle`] / [`StyleSet`]: the inline styles a chunk carries
//!
//! # Example
//!
//! ```
//! use quire_model::Document;
//!
//! let doc = Document::from_json(r#"{"document":[{"e":"par","c":[{"e":"text","t":"hi"}]}]}"#).unwrap();
//! assert_eq!(doc.segments.len(), 1);
//! doc.validate().unwrap();
//! ```

mod document;
mod error;
mod format;
mod line;
mod segment;
mod style;

pub use document::Document;
pub use error::{ModelError, ValidationError};
pub use format::FormatRange;
pub use line::{BlockAttr, Chunk, ImageRef, Line};
pub use segment::Segment;
pub use style::{InlineStyle, StyleSet};
