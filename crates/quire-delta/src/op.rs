//! Serde model of the editor's insert-only operation stream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use quire_config::SpoilerConfig;
use quire_model::{BlockAttr, InlineStyle, StyleSet};

/// One insert operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaOp {
    /// Inserted text or embed.
    pub insert: Insert,
    /// Formatting attributes.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl DeltaOp {
    /// Text insert without attributes.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: Attributes::default(),
        }
    }

    /// Image embed with the given source.
    #[must_use]
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            insert: Insert::Embed(Embed {
                image: Some(ImageEmbed::Source(source.into())),
            }),
            attributes: Attributes::default(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.0.insert(key.to_owned(), value.into());
        self
    }
}

/// Inserted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    /// Text, possibly containing line breaks.
    Text(String),
    /// Embedded object.
    Embed(Embed),
}

/// Embedded object. Only images are understood; other embeds are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Image embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageEmbed>,
}

/// Image embed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEmbed {
    /// Bare image source, resolved to an asset id after upload.
    Source(String),
    /// Image blot carrying its own metadata.
    Blot(ImageBlot),
}

/// Image blot fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlot {
    /// Image source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Already resolved asset id.
    #[serde(
        default,
        rename = "assetId",
        alias = "asset_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_id: Option<String>,
    /// Caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageEmbed {
    /// Image source, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Source(src) => Some(src),
            Self::Blot(blot) => blot.src.as_deref(),
        }
    }
}

/// Operation attributes as sent by the editor.
///
/// Values follow the editor's loose typing (`true`, `"ordered"`, `1`), so they
/// are kept as JSON and read through typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an attribute is present with a truthy value.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(value)) => *value,
            Some(Value::String(value)) => !value.is_empty(),
            Some(Value::Number(value)) => value.as_f64().is_some_and(|n| n.abs() > f64::EPSILON),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    /// String value of an attribute.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Inline styles set on a text insert.
    #[must_use]
    pub fn styles(&self) -> StyleSet {
        let mut styles = StyleSet::EMPTY;
        for (key, style) in [
            ("bold", InlineStyle::Bold),
            ("italic", InlineStyle::Italic),
            ("strike", InlineStyle::Strike),
            ("code", InlineStyle::Code),
        ] {
            if self.flag(key) {
                styles.insert(style);
            }
        }
        if self.get_str("script") == Some("super") {
            styles.insert(InlineStyle::Super);
        }
        styles
    }

    /// Link destination, if set and non-empty.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.get_str("link").filter(|url| !url.is_empty())
    }

    /// Whether the text carries the spoiler sentinel colors.
    #[must_use]
    pub fn is_spoiler(&self, spoiler: &SpoilerConfig) -> bool {
        spoiler.matches_colors(self.get_str("color"), self.get_str("background"))
    }

    /// Block attribute carried by a line-closing newline.
    #[must_use]
    pub fn block(&self) -> BlockAttr {
        if self.flag("header") {
            return BlockAttr::Header(1);
        }
        if self.flag("code-block") {
            return BlockAttr::CodeBlock;
        }
        if self.flag("blockquote") {
            return BlockAttr::Blockquote;
        }
        match self.get_str("list") {
            Some("ordered") => BlockAttr::List { ordered: true },
            Some(list) if !list.is_empty() => BlockAttr::List { ordered: false },
            _ => BlockAttr::Paragraph,
        }
    }
}
