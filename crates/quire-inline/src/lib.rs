//! Inline formatting for Quire.
//!
//! Overlapping inline styles are stored as summed bit weights over character
//! ranges. This crate provides both directions:
//! - [`encode_weight`] / [`build_ranges`]: styled chunks to [`FormatRange`]s
//! - [`decode_weight`]: a weight back to the tag stack that renders it
//! - [`apply_tag`]: the HTML tag to style mapping used during parsing
//!
//! The weight to tag-stack table is closed: sums it does not list have no
//! markup and render unstyled.
//!
//! [`FormatRange`]: quire_model::FormatRange

mod ranges;
mod tags;
mod weight;

pub use ranges::build_ranges;
pub use tags::{InlineTag, TagEffect, apply_tag, decode_weight, tag_effect};
pub use weight::{BOLD, CODE, ITALIC, STRIKE, SUPER, encode_weight, style_bit};
