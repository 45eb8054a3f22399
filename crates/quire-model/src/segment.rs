//! Document tree segments.

use serde::{Deserialize, Serialize};

use crate::format::FormatRange;

/// One node of the document tree, block or inline.
///
/// The wire form is a JSON object tagged by `e`:
///
/// | Variant       | `e`           | Fields                         |
/// |---------------|---------------|--------------------------------|
/// | `Text`        | `text`        | `t`, `f` (omitted when empty)  |
/// | `Link`        | `link`        | `t`, `u`                       |
/// | `SpoilerText` | `spoilertext` | `c`                            |
/// | `Paragraph`   | `par`         | `c`                            |
/// | `Header`      | `h`           | `l`, `c` (raw lines)           |
/// | `List`        | `list`        | `o`, `c` (list items)          |
/// | `ListItem`    | `li`          | `c`                            |
/// | `Blockquote`  | `blockquote`  | `c` (paragraphs)               |
/// | `CodeBlock`   | `code`        | `c` (raw lines)                |
/// | `RawLine`     | `raw`         | `t`                            |
/// | `Image`       | `img`         | `id`, `c` (caption string)     |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "e")]
pub enum Segment {
    /// Run of text with optional format ranges.
    #[serde(rename = "text")]
    Text {
        /// Text content.
        #[serde(rename = "t", default)]
        text: String,
        /// Format ranges, sorted by start and non-overlapping.
        #[serde(rename = "f", default, skip_serializing_if = "Vec::is_empty")]
        formats: Vec<FormatRange>,
    },

    /// Hyperlink.
    #[serde(rename = "link")]
    Link {
        /// Link text.
        #[serde(rename = "t", default)]
        text: String,
        /// Destination URL, verbatim.
        #[serde(rename = "u")]
        url: String,
    },

    /// Reveal-on-interaction inline span.
    #[serde(rename = "spoilertext")]
    SpoilerText {
        /// Inline children.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Paragraph.
    #[serde(rename = "par")]
    Paragraph {
        /// Inline children.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Heading.
    #[serde(rename = "h")]
    Header {
        /// Heading level (1-6).
        #[serde(rename = "l", default = "default_level")]
        level: u8,
        /// Raw text lines.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Ordered or unordered list.
    #[serde(rename = "list")]
    List {
        /// Whether the list is numbered.
        #[serde(rename = "o", default)]
        ordered: bool,
        /// List items.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// List item.
    #[serde(rename = "li")]
    ListItem {
        /// Item paragraphs.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Blockquote.
    #[serde(rename = "blockquote")]
    Blockquote {
        /// Quoted paragraphs.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Preformatted code block.
    #[serde(rename = "code")]
    CodeBlock {
        /// Raw code lines.
        #[serde(rename = "c", default)]
        children: Vec<Segment>,
    },

    /// Unformatted line of text.
    #[serde(rename = "raw")]
    RawLine {
        /// Line content, verbatim.
        #[serde(rename = "t", default)]
        text: String,
    },

    /// Uploaded image.
    #[serde(rename = "img")]
    Image {
        /// Opaque asset identifier from the upload service.
        #[serde(rename = "id")]
        asset_id: String,
        /// Optional caption.
        #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

fn default_level() -> u8 {
    1
}

impl Segment {
    /// Unformatted text segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            formats: Vec::new(),
        }
    }

    /// Text segment with format ranges.
    #[must_use]
    pub fn formatted(text: impl Into<String>, formats: Vec<FormatRange>) -> Self {
        Self::Text {
            text: text.into(),
            formats,
        }
    }

    /// Link segment.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Raw line segment.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::RawLine { text: text.into() }
    }

    /// Paragraph segment.
    #[must_use]
    pub fn paragraph(children: Vec<Segment>) -> Self {
        Self::Paragraph { children }
    }

    /// Child segments, empty for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[Segment] {
        match self {
            Self::SpoilerText { children }
            | Self::Paragraph { children }
            | Self::Header { children, .. }
            | Self::List { children, .. }
            | Self::ListItem { children }
            | Self::Blockquote { children }
            | Self::CodeBlock { children } => children,
            Self::Text { .. } | Self::Link { .. } | Self::RawLine { .. } | Self::Image { .. } => {
                &[]
            }
        }
    }

    /// Text carried directly by a leaf segment.
    #[must_use]
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } | Self::Link { text, .. } | Self::RawLine { text } => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Concatenated text of this segment and all descendants.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self.leaf_text() {
            Some(text) => text.to_owned(),
            None => self.children().iter().map(Self::plain_text).collect(),
        }
    }
}
