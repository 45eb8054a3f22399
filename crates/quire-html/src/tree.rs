//! Element tree for parsed and generated HTML.

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check whether an element name is an HTML void element.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Element node.
///
/// Text uses the text/tail layout: `text` is the content before the first
/// child, each child's `tail` is the content between it and the next sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    /// Lowercase element name.
    pub tag: String,
    /// Direct text content before the first child.
    pub text: String,
    /// Text after the element, inside its parent.
    pub tail: String,
    /// Attributes in document order.
    pub attrs: Vec<(String, String)>,
    /// Child elements.
    pub children: Vec<HtmlNode>,
}

impl HtmlNode {
    /// Create a new node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set tail content.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = tail.into();
        self
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = children;
        self
    }

    /// First value of an attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append text after the last child, or to the node's own text.
    pub fn append_text(&mut self, text: &str) {
        if let Some(last_child) = self.children.last_mut() {
            last_child.tail.push_str(text);
        } else {
            self.text.push_str(text);
        }
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: HtmlNode) {
        self.children.push(child);
    }

    /// Text of this node and all descendants, excluding this node's tail.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
            out.push_str(&child.tail);
        }
        out
    }
}
