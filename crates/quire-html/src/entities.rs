//! HTML entity to Unicode conversion.
//!
//! The markup reader only understands the five XML entities, so named HTML
//! entities are rewritten to their characters first. XML entities and unknown
//! names are left in place.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Named entity reference.
static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([a-zA-Z][a-zA-Z0-9]*);").expect("invalid entity regex"));

/// Replace named HTML entities with their characters.
pub fn convert_html_entities(html: &str) -> Cow<'_, str> {
    ENTITY_PATTERN.replace_all(html, |caps: &regex::Captures| {
        entity_to_unicode(&caps[1]).map_or_else(|| caps[0].to_owned(), str::to_owned)
    })
}

/// Map an HTML entity name to its character.
fn entity_to_unicode(name: &str) -> Option<&'static str> {
    Some(match name {
        // Spacing
        "nbsp" => "\u{00a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "shy" => "\u{00ad}",
        "zwnj" => "\u{200c}",
        "zwj" => "\u{200d}",

        // Punctuation
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "middot" => "\u{00b7}",
        "iexcl" => "\u{00a1}",
        "iquest" => "\u{00bf}",

        // Symbols
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{00b0}",
        "sect" => "\u{00a7}",
        "para" => "\u{00b6}",
        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",
        "plusmn" => "\u{00b1}",
        "euro" => "\u{20ac}",
        "pound" => "\u{00a3}",
        "yen" => "\u{00a5}",
        "cent" => "\u{00a2}",

        // Arrows
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "uarr" => "\u{2191}",
        "darr" => "\u{2193}",

        _ => return None,
    })
}
