//! Runs to top-level document segments.

use quire_model::{BlockAttr, ImageRef, Line, Segment};

use crate::inline::inline_segments;
use crate::runs::{RunKind, runs};

/// Group lines into top-level document segments.
///
/// - header line: `h` with the line's raw text, inline styling dropped
/// - code block run: one `code` with a `raw` child per line; a blank last
///   line closing the run is dropped
/// - blockquote run: one `blockquote` with a `par` per line
/// - list run: one `list` with an `li` wrapping a `par` per line
/// - image line: standalone `img`
/// - anything else: `par` with inline children
#[must_use]
pub fn segment(lines: &[Line]) -> Vec<Segment> {
    let mut segments = Vec::new();

    for run in runs(lines) {
        let run_lines = &lines[run.range];
        match run.kind {
            RunKind::Single => segments.extend(run_lines.iter().map(single_line)),
            RunKind::CodeBlock => segments.push(code_block(run_lines)),
            RunKind::Blockquote => segments.push(Segment::Blockquote {
                children: run_lines.iter().map(paragraph).collect(),
            }),
            RunKind::List { ordered } => segments.push(Segment::List {
                ordered,
                children: run_lines
                    .iter()
                    .map(|line| Segment::ListItem {
                        children: vec![paragraph(line)],
                    })
                    .collect(),
            }),
        }
    }

    tracing::debug!(
        lines = lines.len(),
        segments = segments.len(),
        "Segmented lines"
    );
    segments
}

fn single_line(line: &Line) -> Segment {
    match &line.block {
        BlockAttr::Header(level) => Segment::Header {
            level: *level,
            children: vec![Segment::raw(line.text())],
        },
        BlockAttr::Image(ImageRef { asset_id, caption }) => Segment::Image {
            asset_id: asset_id.clone(),
            caption: caption.clone(),
        },
        _ => paragraph(line),
    }
}

fn paragraph(line: &Line) -> Segment {
    Segment::paragraph(inline_segments(&line.chunks))
}

fn code_block(lines: &[Line]) -> Segment {
    let kept = match lines.split_last() {
        Some((last, rest)) if last.is_blank() => rest,
        _ => lines,
    };
    Segment::CodeBlock {
        children: kept.iter().map(|line| Segment::raw(line.text())).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_model::{Chunk, FormatRange, InlineStyle, StyleSet};

    fn code(text: &str) -> Line {
        Line::new(BlockAttr::CodeBlock, vec![Chunk::plain(text)])
    }

    #[test]
    fn test_header_drops_styling() {
        let lines = vec![Line::new(
            BlockAttr::Header(1),
            vec![
                Chunk::plain("Header "),
                Chunk::styled("text", StyleSet::only(InlineStyle::Bold)),
            ],
        )];
        assert_eq!(
            segment(&lines),
            vec![Segment::Header {
                level: 1,
                children: vec![Segment::raw("Header text")],
            }]
        );
    }

    #[test]
    fn test_code_block_drops_trailing_blank_line() {
        let lines = vec![
            code("const a = 1;"),
            code("const b = 2;"),
            code("const c = a + b;"),
            code(""),
        ];
        assert_eq!(
            segment(&lines),
            vec![Segment::CodeBlock {
                children: vec![
                    Segment::raw("const a = 1;"),
                    Segment::raw("const b = 2;"),
                    Segment::raw("const c = a + b;"),
                ],
            }]
        );
    }

    #[test]
    fn test_code_block_keeps_inner_blank_lines() {
        let lines = vec![code("a"), code(""), code("b")];
        assert_eq!(
            segment(&lines),
            vec![Segment::CodeBlock {
                children: vec![Segment::raw("a"), Segment::raw(""), Segment::raw("b")],
            }]
        );
    }

    #[test]
    fn test_only_one_trailing_blank_dropped() {
        let lines = vec![code("a"), code(""), code("")];
        assert_eq!(
            segment(&lines),
            vec![Segment::CodeBlock {
                children: vec![Segment::raw("a"), Segment::raw("")],
            }]
        );
    }

    #[test]
    fn test_code_block_preserves_indentation() {
        let lines = vec![code("    console.log(\"hello world\");")];
        assert_eq!(
            segment(&lines),
            vec![Segment::CodeBlock {
                children: vec![Segment::raw("    console.log(\"hello world\");")],
            }]
        );
    }

    #[test]
    fn test_blockquote_run() {
        let lines = vec![
            Line::new(BlockAttr::Blockquote, vec![Chunk::plain("block line 1")]),
            Line::new(
                BlockAttr::Blockquote,
                vec![Chunk::styled("quote", StyleSet::only(InlineStyle::Super))],
            ),
        ];
        assert_eq!(
            segment(&lines),
            vec![Segment::Blockquote {
                children: vec![
                    Segment::paragraph(vec![Segment::text("block line 1")]),
                    Segment::paragraph(vec![Segment::formatted(
                        "quote",
                        vec![FormatRange::new(32, 0, 5)]
                    )]),
                ],
            }]
        );
    }

    #[test]
    fn test_lists_split_by_ordered_flag() {
        let item = |ordered, text: &str| {
            Line::new(BlockAttr::List { ordered }, vec![Chunk::plain(text)])
        };
        let lines = vec![
            item(false, "ul 1"),
            item(false, "ul 2"),
            item(true, "ol 1"),
        ];
        let li = |text: &str| Segment::ListItem {
            children: vec![Segment::paragraph(vec![Segment::text(text)])],
        };
        assert_eq!(
            segment(&lines),
            vec![
                Segment::List {
                    ordered: false,
                    children: vec![li("ul 1"), li("ul 2")],
                },
                Segment::List {
                    ordered: true,
                    children: vec![li("ol 1")],
                },
            ]
        );
    }

    #[test]
    fn test_image_is_standalone() {
        let lines = vec![
            Line::paragraph(vec![Chunk::plain("before")]),
            Line::new(
                BlockAttr::Image(ImageRef {
                    asset_id: "nh8qumjnmbq81".to_owned(),
                    caption: Some("My awesome caption!".to_owned()),
                }),
                vec![],
            ),
        ];
        assert_eq!(
            segment(&lines)[1],
            Segment::Image {
                asset_id: "nh8qumjnmbq81".to_owned(),
                caption: Some("My awesome caption!".to_owned()),
            }
        );
    }

    #[test]
    fn test_empty_paragraph_kept() {
        let lines = vec![Line::paragraph(vec![])];
        assert_eq!(segment(&lines), vec![Segment::paragraph(vec![])]);
    }
}
