//! Intermediate line structure shared by the ingestion adapters.

use crate::style::StyleSet;

/// Run of text with uniform inline attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    /// Text content.
    pub text: String,
    /// Active inline styles.
    pub styles: StyleSet,
    /// Link destination when the chunk is inside a link.
    pub link: Option<String>,
    /// Whether the chunk is inside a spoiler.
    pub spoiler: bool,
}

impl Chunk {
    /// Unstyled chunk.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Chunk with the given styles.
    #[must_use]
    pub fn styled(text: impl Into<String>, styles: StyleSet) -> Self {
        Self {
            text: text.into(),
            styles,
            ..Self::default()
        }
    }

    /// Set the link destination.
    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Mark the chunk as spoiler text.
    #[must_use]
    pub fn as_spoiler(mut self) -> Self {
        self.spoiler = true;
        self
    }
}

/// Resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Opaque asset identifier.
    pub asset_id: String,
    /// Optional caption.
    pub caption: Option<String>,
}

/// Block-level attribute of a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockAttr {
    /// Plain paragraph.
    #[default]
    Paragraph,
    /// Heading with level.
    Header(u8),
    /// List item line.
    List {
        /// Whether the list is numbered.
        ordered: bool,
    },
    /// Line inside a blockquote.
    Blockquote,
    /// Line inside a code block.
    CodeBlock,
    /// Standalone image.
    Image(ImageRef),
}

/// One line of content with its block attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Ordered inline chunks.
    pub chunks: Vec<Chunk>,
    /// Block attribute applying to the whole line.
    pub block: BlockAttr,
}

impl Line {
    /// Create a line with the given block attribute and chunks.
    #[must_use]
    pub fn new(block: BlockAttr, chunks: Vec<Chunk>) -> Self {
        Self { chunks, block }
    }

    /// Paragraph line.
    #[must_use]
    pub fn paragraph(chunks: Vec<Chunk>) -> Self {
        Self::new(BlockAttr::Paragraph, chunks)
    }

    /// Concatenated chunk text.
    #[must_use]
    pub fn text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.text.as_str()).collect()
    }

    /// Whether the line carries no text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.chunks.iter().all(|chunk| chunk.text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InlineStyle;

    #[test]
    fn test_line_text_concatenates_chunks() {
        let line = Line::paragraph(vec![
            Chunk::plain("bold "),
            Chunk::styled("italic", StyleSet::only(InlineStyle::Italic)),
        ]);
        assert_eq!(line.text(), "bold italic");
        assert!(!line.is_blank());
    }

    #[test]
    fn test_blank_line() {
        assert!(Line::new(BlockAttr::CodeBlock, vec![]).is_blank());
        assert!(Line::new(BlockAttr::CodeBlock, vec![Chunk::plain("")]).is_blank());
    }

    #[test]
    fn test_chunk_builders() {
        let chunk = Chunk::plain("x").with_link("https://example.com").as_spoiler();
        assert_eq!(chunk.link.as_deref(), Some("https://example.com"));
        assert!(chunk.spoiler);
    }
}
