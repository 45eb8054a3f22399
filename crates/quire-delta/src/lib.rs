//! Editor operation stream ingestion.
//!
//! The editing surface reports its content as an insert-only delta: text
//! inserts carrying inline attributes, newlines carrying the block attribute
//! of the line they close, and image embeds. This crate groups those records
//! into [`Line`]s and leaves block grouping to `quire-blocks`.
//!
//! Image embeds reference local sources; `assets` maps each uploaded source to
//! the asset id the upload step returned.

mod error;
mod lines;
mod op;

pub use error::DeltaError;
pub use lines::{LineBuilder, delta_to_lines};
pub use op::{Attributes, DeltaOp, Embed, ImageBlot, ImageEmbed, Insert};

use std::collections::HashMap;

use serde::Deserialize;

use quire_config::SpoilerConfig;
use quire_model::{Line, Segment};

/// Accepted top-level shapes of operation JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum OpsJson {
    Bare(Vec<DeltaOp>),
    Wrapped { ops: Vec<DeltaOp> },
}

/// Parse operation JSON, either a bare array or `{"ops": [...]}`.
///
/// # Errors
///
/// Returns [`DeltaError::Json`] if the input is not a valid operation stream.
pub fn parse_ops(json: &str) -> Result<Vec<DeltaOp>, DeltaError> {
    let ops = match serde_json::from_str(json)? {
        OpsJson::Bare(ops) | OpsJson::Wrapped { ops } => ops,
    };
    Ok(ops)
}

/// Convert an operation stream into top-level document segments.
#[must_use]
pub fn delta_to_segments(
    ops: &[DeltaOp],
    assets: &HashMap<String, String>,
    spoiler: &SpoilerConfig,
) -> Vec<Segment> {
    let lines: Vec<Line> = delta_to_lines(ops, assets, spoiler);
    quire_blocks::segment(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_model::FormatRange;

    #[test]
    fn test_parse_ops_shapes() {
        let bare = parse_ops(r#"[{"insert": "a\n"}]"#).unwrap();
        let wrapped = parse_ops(r#"{"ops": [{"insert": "a\n"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare, vec![DeltaOp::text("a\n")]);
    }

    #[test]
    fn test_parse_ops_rejects_garbage() {
        assert!(matches!(parse_ops("{\"nope\": 1}"), Err(DeltaError::Json(_))));
        assert!(parse_ops("[{\"insert\": 5}]").is_err());
    }

    #[test]
    fn test_delta_to_segments() {
        let ops = parse_ops(
            r#"[
                {"insert": "Header"},
                {"insert": "\n", "attributes": {"header": 1}},
                {"insert": "bold", "attributes": {"bold": true}},
                {"insert": " plain\n"},
                {"insert": "one"},
                {"insert": "\n", "attributes": {"list": "bullet"}},
                {"insert": "two"},
                {"insert": "\n", "attributes": {"list": "bullet"}},
                {"insert": "let a = 1;"},
                {"insert": "\n", "attributes": {"code-block": true}},
                {"insert": "quoted"},
                {"insert": "\n", "attributes": {"blockquote": true}}
            ]"#,
        )
        .unwrap();

        let li = |text: &str| Segment::ListItem {
            children: vec![Segment::paragraph(vec![Segment::text(text)])],
        };
        assert_eq!(
            delta_to_segments(&ops, &HashMap::new(), &SpoilerConfig::default()),
            vec![
                Segment::Header {
                    level: 1,
                    children: vec![Segment::raw("Header")],
                },
                Segment::paragraph(vec![Segment::formatted(
                    "bold plain",
                    vec![FormatRange::new(1, 0, 4)]
                )]),
                Segment::List {
                    ordered: false,
                    children: vec![li("one"), li("two")],
                },
                Segment::CodeBlock {
                    children: vec![Segment::raw("let a = 1;")],
                },
                Segment::Blockquote {
                    children: vec![Segment::paragraph(vec![Segment::text("quoted")])],
                },
            ]
        );
    }
}
