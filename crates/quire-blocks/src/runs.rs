//! Run scanning over attributed lines.

use std::ops::Range;

use quire_model::{BlockAttr, Line};

/// Grouping kind of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Line that never groups: paragraph, header or image.
    Single,
    /// List items with the same ordered flag.
    List {
        /// Whether the list is numbered.
        ordered: bool,
    },
    /// Blockquote lines.
    Blockquote,
    /// Code block lines.
    CodeBlock,
}

impl RunKind {
    /// Grouping kind of a block attribute.
    #[must_use]
    pub fn of(block: &BlockAttr) -> Self {
        match block {
            BlockAttr::List { ordered } => Self::List { ordered: *ordered },
            BlockAttr::Blockquote => Self::Blockquote,
            BlockAttr::CodeBlock => Self::CodeBlock,
            BlockAttr::Paragraph | BlockAttr::Header(_) | BlockAttr::Image(_) => Self::Single,
        }
    }

    /// Whether a following line of the same kind extends the run.
    #[must_use]
    pub const fn extends(self) -> bool {
        !matches!(self, Self::Single)
    }
}

/// Maximal contiguous group of lines sharing one block attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Grouping kind.
    pub kind: RunKind,
    /// Line indices covered by the run.
    pub range: Range<usize>,
}

/// Split lines into runs in one forward pass.
///
/// The scan keeps the kind and start index of the open run. A line of the same
/// groupable kind extends it; any other line closes it and opens a new one.
/// Every line belongs to exactly one run and runs are returned in order.
#[must_use]
pub fn runs(lines: &[Line]) -> Vec<Run> {
    let mut out = Vec::new();
    let mut open: Option<(RunKind, usize)> = None;

    for (index, line) in lines.iter().enumerate() {
        let kind = RunKind::of(&line.block);
        match open {
            Some((current, _)) if current == kind && kind.extends() => continue,
            Some((current, start)) => out.push(Run {
                kind: current,
                range: start..index,
            }),
            None => {}
        }
        open = Some((kind, index));
    }

    if let Some((kind, start)) = open {
        out.push(Run {
            kind,
            range: start..lines.len(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_model::ImageRef;

    fn line(block: BlockAttr) -> Line {
        Line::new(block, vec![])
    }

    #[test]
    fn test_empty_input() {
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn test_paragraphs_never_group() {
        let lines = vec![line(BlockAttr::Paragraph), line(BlockAttr::Paragraph)];
        assert_eq!(
            runs(&lines),
            vec![
                Run {
                    kind: RunKind::Single,
                    range: 0..1
                },
                Run {
                    kind: RunKind::Single,
                    range: 1..2
                },
            ]
        );
    }

    #[test]
    fn test_adjacent_blockquotes_group() {
        let lines = vec![
            line(BlockAttr::Header(1)),
            line(BlockAttr::Blockquote),
            line(BlockAttr::Blockquote),
            line(BlockAttr::Blockquote),
            line(BlockAttr::Paragraph),
        ];
        let result = runs(&lines);
        assert_eq!(result.len(), 3);
        assert_eq!(
            result[1],
            Run {
                kind: RunKind::Blockquote,
                range: 1..4
            }
        );
    }

    #[test]
    fn test_list_flag_change_closes_run() {
        let lines = vec![
            line(BlockAttr::List { ordered: false }),
            line(BlockAttr::List { ordered: false }),
            line(BlockAttr::List { ordered: true }),
        ];
        assert_eq!(
            runs(&lines),
            vec![
                Run {
                    kind: RunKind::List { ordered: false },
                    range: 0..2
                },
                Run {
                    kind: RunKind::List { ordered: true },
                    range: 2..3
                },
            ]
        );
    }

    #[test]
    fn test_run_bounded_at_end_of_input() {
        let lines = vec![line(BlockAttr::CodeBlock), line(BlockAttr::CodeBlock)];
        assert_eq!(
            runs(&lines),
            vec![Run {
                kind: RunKind::CodeBlock,
                range: 0..2
            }]
        );
    }

    #[test]
    fn test_every_line_in_exactly_one_run() {
        let image = BlockAttr::Image(ImageRef {
            asset_id: "a".to_owned(),
            caption: None,
        });
        let lines = vec![
            line(BlockAttr::CodeBlock),
            line(BlockAttr::Blockquote),
            line(image.clone()),
            line(image),
            line(BlockAttr::List { ordered: true }),
            line(BlockAttr::CodeBlock),
            line(BlockAttr::CodeBlock),
        ];
        let result = runs(&lines);
        let covered: Vec<usize> = result.iter().flat_map(|run| run.range.clone()).collect();
        assert_eq!(covered, (0..lines.len()).collect::<Vec<_>>());
        assert_eq!(result.len(), 6);
    }
}
