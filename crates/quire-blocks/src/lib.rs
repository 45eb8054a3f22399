//! Block segmentation for Quire.
//!
//! Both ingestion paths (HTML and the editor operation stream) normalize their
//! input into [`Line`]s. This crate owns every block-grouping decision:
//!
//! - [`runs`]: single forward scan splitting lines into maximal runs that share
//!   a block attribute
//! - [`segment`]: turns runs into top-level document segments
//! - [`inline_segments`]: splits a line's chunks into text, link and spoiler
//!   segments with format ranges
//!
//! [`Line`]: quire_model::Line

mod inline;
mod runs;
mod segmenter;

pub use inline::inline_segments;
pub use runs::{Run, RunKind, runs};
pub use segmenter::segment;
