//! HTML conversion for Quire documents.
//!
//! Parsing reads an HTML fragment into an element tree, collects its text
//! leaves into [`Line`]s and hands them to the block segmenter:
//!
//! ```text
//! HTML ──parse──> HtmlNode ──collect──> Vec<Line> ──segment──> Vec<Segment>
//! ```
//!
//! Generation walks a validated [`Document`] and serializes the produced
//! element tree, decoding format weights through the inline tag table.
//!
//! # Example
//!
//! ```
//! use quire_config::CodecConfig;
//! use quire_html::{document_to_html, html_to_segments};
//! use quire_model::Document;
//!
//! let config = CodecConfig::default();
//! let segments = html_to_segments("<p><strong>bold</strong> text</p>", &config).unwrap();
//! let html = document_to_html(&Document::new(segments), &config).unwrap();
//! assert_eq!(html, "<p><strong>bold </strong><span>text</span></p>");
//! ```

mod entities;
mod error;
mod generate;
mod ingest;
mod parser;
mod serializer;
mod tree;

pub use entities::convert_html_entities;
pub use error::HtmlError;
pub use generate::HtmlGenerator;
pub use ingest::LineCollector;
pub use parser::{HtmlParser, ROOT_TAG};
pub use serializer::serialize;
pub use tree::{HtmlNode, is_void};

use quire_config::CodecConfig;
use quire_model::{Document, Line, Segment};

/// Parse an HTML fragment into lines.
///
/// # Errors
///
/// Returns [`HtmlError`] if the markup is malformed or nested too deeply.
pub fn html_to_lines(html: &str, config: &CodecConfig) -> Result<Vec<Line>, HtmlError> {
    let root = HtmlParser::new(config.html.max_depth).parse(html)?;
    Ok(LineCollector::new(&config.spoiler).collect(&root))
}

/// Parse an HTML fragment into top-level document segments.
///
/// # Errors
///
/// Returns [`HtmlError`] if the markup is malformed or nested too deeply.
pub fn html_to_segments(html: &str, config: &CodecConfig) -> Result<Vec<Segment>, HtmlError> {
    let lines = html_to_lines(html, config)?;
    Ok(quire_blocks::segment(&lines))
}

/// Render a document as HTML.
///
/// # Errors
///
/// Returns [`HtmlError::Validation`] if a text segment's format ranges are out
/// of bounds or overlap, or a header level is outside 1 to 6.
pub fn document_to_html(document: &Document, config: &CodecConfig) -> Result<String, HtmlError> {
    document.validate()?;
    let nodes = HtmlGenerator::new(config).generate(document);
    tracing::debug!(
        segments = document.segments.len(),
        nodes = nodes.len(),
        "Generated HTML"
    );
    Ok(serialize(&nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quire_model::FormatRange;

    #[test]
    fn test_html_to_segments_list() {
        let segments = html_to_segments(
            "<ul><li>Item 1</li><li><strong>Bold Item 2</strong></li></ul>",
            &CodecConfig::default(),
        )
        .unwrap();
        let li = |text: Segment| Segment::ListItem {
            children: vec![Segment::paragraph(vec![text])],
        };
        assert_eq!(
            segments,
            vec![Segment::List {
                ordered: false,
                children: vec![
                    li(Segment::text("Item 1")),
                    li(Segment::formatted(
                        "Bold Item 2",
                        vec![FormatRange::new(1, 0, 11)]
                    )),
                ],
            }]
        );
    }

    #[test]
    fn test_document_to_html_validates() {
        let document = Document::new(vec![Segment::paragraph(vec![Segment::formatted(
            "short",
            vec![FormatRange::new(1, 2, 10)],
        )])]);
        let result = document_to_html(&document, &CodecConfig::default());
        assert!(matches!(result, Err(HtmlError::Validation(_))));
    }

    #[test]
    fn test_depth_limit_from_config() {
        let mut config = CodecConfig::default();
        config.html.max_depth = 2;
        let result = html_to_lines("<p><strong><em>x</em></strong></p>", &config);
        assert!(matches!(result, Err(HtmlError::TooDeep { limit: 2 })));
    }

    #[test]
    fn test_malformed_markup_fails() {
        let result = html_to_segments("<p><strong>x</p>", &CodecConfig::default());
        assert!(result.is_err());
    }
}
