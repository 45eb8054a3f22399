//! Building format ranges from weighted chunks.

use quire_model::FormatRange;

/// Build format ranges from ordered `(text, weight)` chunks.
///
/// Offsets accumulate over the concatenated chunk text. A range is emitted for
/// every chunk with a non-zero weight that contains at least one
/// non-whitespace character. When a chunk ends in exactly one space, that
/// space is left out of the range; longer trailing runs are kept.
///
/// ```
/// use quire_inline::build_ranges;
/// use quire_model::FormatRange;
///
/// let ranges = build_ranges([("bold ", 1), ("italic", 3)]);
/// assert_eq!(ranges, vec![FormatRange::new(1, 0, 4), FormatRange::new(3, 5, 6)]);
/// ```
pub fn build_ranges<'a, I>(chunks: I) -> Vec<FormatRange>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut ranges = Vec::new();
    let mut cursor = 0;

    for (text, weight) in chunks {
        let len = text.chars().count();
        if weight != 0 && text.chars().any(|c| !c.is_whitespace()) {
            let length = if ends_with_single_space(text) {
                len - 1
            } else {
                len
            };
            ranges.push(FormatRange::new(weight, cursor, length));
        }
        cursor += len;
    }

    ranges
}

fn ends_with_single_space(text: &str) -> bool {
    text.ends_with(' ') && !text.ends_with("  ")
}
