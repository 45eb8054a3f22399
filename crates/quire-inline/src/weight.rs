//! Style bit weights.

use quire_model::{InlineStyle, StyleSet};

/// Bold bit.
pub const BOLD: u32 = 1;
/// Italic bit.
pub const ITALIC: u32 = 2;
/// Strikethrough bit.
pub const STRIKE: u32 = 8;
/// Superscript bit.
pub const SUPER: u32 = 32;
/// Inline code bit.
pub const CODE: u32 = 64;

/// Bit value of a single style.
#[must_use]
pub const fn style_bit(style: InlineStyle) -> u32 {
    match style {
        InlineStyle::Bold => BOLD,
        InlineStyle::Italic => ITALIC,
        InlineStyle::Strike => STRIKE,
        InlineStyle::Super => SUPER,
        InlineStyle::Code => CODE,
    }
}

/// Sum of the bits of all active styles.
#[must_use]
pub fn encode_weight(styles: StyleSet) -> u32 {
    styles.iter().map(style_bit).sum()
}
