//! Weight to markup mapping in both directions.

use quire_model::{InlineStyle, StyleSet};

/// Inline markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineTag {
    /// `strong`
    Strong,
    /// `em`
    Em,
    /// `s`
    Strike,
    /// `sup`
    Sup,
    /// `code`
    Code,
}

impl InlineTag {
    /// Element name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Strike => "s",
            Self::Sup => "sup",
            Self::Code => "code",
        }
    }
}

/// Tag stack, outermost first, that renders a combined weight.
///
/// Returns `None` for sums outside the table; callers render those unstyled.
#[must_use]
pub fn decode_weight(weight: u32) -> Option<&'static [InlineTag]> {
    use InlineTag::{Code, Em, Strike, Strong, Sup};

    let stack: &'static [InlineTag] = match weight {
        1 => &[Strong],
        2 => &[Em],
        3 => &[Strong, Em],
        8 => &[Strike],
        9 => &[Strong, Strike],
        10 => &[Em, Strike],
        32 => &[Sup],
        33 => &[Sup, Strong],
        34 => &[Sup, Em],
        64 => &[Code],
        _ => return None,
    };
    Some(stack)
}

/// How an HTML element changes the active style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEffect {
    /// Add the style to the inherited set.
    Add(InlineStyle),
    /// Replace the inherited set with only this style.
    Override(InlineStyle),
}

/// Style effect of an HTML element name, if any.
#[must_use]
pub fn tag_effect(tag: &str) -> Option<TagEffect> {
    Some(match tag {
        "strong" | "b" => TagEffect::Add(InlineStyle::Bold),
        "em" | "i" => TagEffect::Add(InlineStyle::Italic),
        "s" => TagEffect::Add(InlineStyle::Strike),
        "code" => TagEffect::Override(InlineStyle::Code),
        "sup" => TagEffect::Override(InlineStyle::Super),
        _ => return None,
    })
}

/// Apply an element's style effect to the inherited style set.
#[must_use]
pub fn apply_tag(styles: StyleSet, tag: &str) -> StyleSet {
    match tag_effect(tag) {
        Some(TagEffect::Add(style)) => styles.with(style),
        Some(TagEffect::Override(style)) => StyleSet::only(style),
        None => styles,
    }
}
