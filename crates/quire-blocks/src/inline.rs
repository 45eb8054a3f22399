//! Inline segment construction from line chunks.

use quire_inline::{build_ranges, encode_weight};
use quire_model::{Chunk, Segment};

/// Which inline segment a chunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span<'a> {
    Text,
    Link(&'a str),
    Spoiler,
}

impl<'a> Span<'a> {
    fn of(chunk: &'a Chunk) -> Self {
        match chunk.link.as_deref() {
            Some(url) if !url.is_empty() => Self::Link(url),
            _ if chunk.spoiler => Self::Spoiler,
            _ => Self::Text,
        }
    }
}

/// Build inline segments from a line's chunks.
///
/// Consecutive chunks of the same kind merge: plain chunks into one text
/// segment with format ranges, chunks with the same URL into one link, spoiler
/// chunks into one spoiler wrapping a text segment. Links take precedence over
/// spoilers. Empty chunks are ignored.
#[must_use]
pub fn inline_segments(chunks: &[Chunk]) -> Vec<Segment> {
    let chunks: Vec<&Chunk> = chunks.iter().filter(|c| !c.text.is_empty()).collect();

    chunks
        .chunk_by(|a, b| Span::of(a) == Span::of(b))
        .filter_map(|group| {
            let first = group.first()?;
            Some(match Span::of(first) {
                Span::Text => text_segment(group),
                Span::Link(url) => Segment::link(concat(group), url),
                Span::Spoiler => Segment::SpoilerText {
                    children: vec![text_segment(group)],
                },
            })
        })
        .collect()
}

fn text_segment(group: &[&Chunk]) -> Segment {
    let formats = build_ranges(
        group
            .iter()
            .map(|chunk| (chunk.text.as_str(), encode_weight(chunk.styles))),
    );
    Segment::formatted(concat(group), formats)
}

fn concat(group: &[&Chunk]) -> String {
    group.iter().map(|chunk| chunk.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_model::{FormatRange, InlineStyle, StyleSet};

    fn bold() -> StyleSet {
        StyleSet::only(InlineStyle::Bold)
    }

    #[test]
    fn test_plain_text() {
        let segments = inline_segments(&[Chunk::plain("Item 1")]);
        assert_eq!(segments, vec![Segment::text("Item 1")]);
    }

    #[test]
    fn test_formatted_text() {
        let segments = inline_segments(&[
            Chunk::styled("bold ", bold()),
            Chunk::styled("italic", bold().with(InlineStyle::Italic)),
        ]);
        assert_eq!(
            segments,
            vec![Segment::formatted(
                "bold italic",
                vec![FormatRange::new(1, 0, 4), FormatRange::new(3, 5, 6)]
            )]
        );
    }

    #[test]
    fn test_link_splits_text() {
        let segments = inline_segments(&[
            Chunk::plain("Text with "),
            Chunk::plain("inline link").with_link("https://www.google.com"),
            Chunk::plain(" works"),
        ]);
        assert_eq!(
            segments,
            vec![
                Segment::text("Text with "),
                Segment::link("inline link", "https://www.google.com"),
                Segment::text(" works"),
            ]
        );
    }

    #[test]
    fn test_adjacent_link_chunks_merge() {
        let segments = inline_segments(&[
            Chunk::styled("bold", bold()).with_link("https://a.example"),
            Chunk::plain(" tail").with_link("https://a.example"),
            Chunk::plain("other").with_link("https://b.example"),
        ]);
        assert_eq!(
            segments,
            vec![
                Segment::link("bold tail", "https://a.example"),
                Segment::link("other", "https://b.example"),
            ]
        );
    }

    #[test]
    fn test_spoiler_splits_text() {
        let segments = inline_segments(&[
            Chunk::plain("Inline "),
            Chunk::plain("with spoiler").as_spoiler(),
        ]);
        assert_eq!(
            segments,
            vec![
                Segment::text("Inline "),
                Segment::SpoilerText {
                    children: vec![Segment::text("with spoiler")],
                },
            ]
        );
    }

    #[test]
    fn test_spoiler_keeps_own_ranges() {
        let segments = inline_segments(&[
            Chunk::plain("a ").as_spoiler(),
            Chunk::styled("b", bold()).as_spoiler(),
        ]);
        assert_eq!(
            segments,
            vec![Segment::SpoilerText {
                children: vec![Segment::formatted("a b", vec![FormatRange::new(1, 2, 1)])],
            }]
        );
    }

    #[test]
    fn test_ranges_restart_after_link() {
        let segments = inline_segments(&[
            Chunk::styled("one", bold()),
            Chunk::plain("link").with_link("https://x.example"),
            Chunk::styled("two", bold()),
        ]);
        assert_eq!(
            segments,
            vec![
                Segment::formatted("one", vec![FormatRange::new(1, 0, 3)]),
                Segment::link("link", "https://x.example"),
                Segment::formatted("two", vec![FormatRange::new(1, 0, 3)]),
            ]
        );
    }

    #[test]
    fn test_empty_chunks_ignored() {
        let segments = inline_segments(&[
            Chunk::plain("a"),
            Chunk::plain("").with_link("https://x.example"),
            Chunk::plain("b"),
        ]);
        assert_eq!(segments, vec![Segment::text("ab")]);
    }

    #[test]
    fn test_no_chunks() {
        assert!(inline_segments(&[]).is_empty());
    }
}
