//! Document to element tree.

use quire_config::CodecConfig;
use quire_inline::decode_weight;
use quire_model::{Document, FormatRange, Segment};

use crate::tree::HtmlNode;

/// Builds HTML element trees from documents.
#[derive(Debug, Clone, Copy)]
pub struct HtmlGenerator<'a> {
    config: &'a CodecConfig,
}

impl<'a> HtmlGenerator<'a> {
    /// Create a generator using `config` for spoiler and image output.
    #[must_use]
    pub fn new(config: &'a CodecConfig) -> Self {
        Self { config }
    }

    /// Generate the top-level nodes of a document.
    ///
    /// The document is assumed valid; see [`Document::validate`].
    #[must_use]
    pub fn generate(&self, document: &Document) -> Vec<HtmlNode> {
        document
            .segments
            .iter()
            .map(|segment| self.block(segment))
            .collect()
    }

    fn block(&self, segment: &Segment) -> HtmlNode {
        match segment {
            Segment::Paragraph { children } => {
                let mut p = HtmlNode::new("p");
                self.inline_all(&mut p, children);
                if p.text.is_empty() && p.children.is_empty() {
                    p.push_child(HtmlNode::new("br"));
                }
                p
            }
            Segment::Header { children, .. } => HtmlNode::new("h1")
                .with_text(children.iter().map(Segment::plain_text).collect::<String>()),
            Segment::List { ordered, children } => {
                let tag = if *ordered { "ol" } else { "ul" };
                HtmlNode::new(tag).with_children(
                    children.iter().map(|item| self.list_item(item)).collect(),
                )
            }
            Segment::ListItem { .. } => self.list_item(segment),
            Segment::Blockquote { children } => HtmlNode::new("span").with_children(
                children
                    .iter()
                    .map(|par| self.flatten_into(HtmlNode::new("blockquote"), par))
                    .collect(),
            ),
            Segment::CodeBlock { children } => {
                let mut text = String::new();
                for line in children {
                    text.push_str(&line.plain_text());
                    text.push('\n');
                }
                HtmlNode::new("pre").with_text(text)
            }
            Segment::Image { asset_id, caption } => {
                let mut img = HtmlNode::new("img");
                if let Some(src) = self.config.images.asset_url(asset_id) {
                    img = img.with_attr("src", src);
                }
                img = img.with_attr("data-asset-id", asset_id.as_str());
                if let Some(caption) = caption {
                    img = img.with_attr("data-caption", caption.as_str());
                }
                img
            }
            Segment::Text { .. }
            | Segment::Link { .. }
            | Segment::SpoilerText { .. }
            | Segment::RawLine { .. } => {
                let mut p = HtmlNode::new("p");
                self.inline(&mut p, segment);
                p
            }
        }
    }

    /// `li` holding its paragraphs' inline content directly.
    fn list_item(&self, item: &Segment) -> HtmlNode {
        match item {
            Segment::ListItem { children } => children
                .iter()
                .fold(HtmlNode::new("li"), |li, child| self.flatten_into(li, child)),
            other => self.flatten_into(HtmlNode::new("li"), other),
        }
    }

    /// Render a paragraph's inline children straight into `node`.
    fn flatten_into(&self, mut node: HtmlNode, segment: &Segment) -> HtmlNode {
        match segment {
            Segment::Paragraph { children } => self.inline_all(&mut node, children),
            other => self.inline(&mut node, other),
        }
        node
    }

    fn inline_all(&self, parent: &mut HtmlNode, segments: &[Segment]) {
        for segment in segments {
            self.inline(parent, segment);
        }
    }

    fn inline(&self, parent: &mut HtmlNode, segment: &Segment) {
        match segment {
            Segment::Text { text, formats } => render_text(parent, text, formats),
            Segment::Link { text, url } => {
                parent.push_child(
                    HtmlNode::new("a")
                        .with_attr("href", url.as_str())
                        .with_text(text.as_str()),
                );
            }
            Segment::SpoilerText { children } => {
                let text = children
                    .iter()
                    .map(Segment::plain_text)
                    .collect::<Vec<_>>()
                    .join(" ");
                parent.push_child(HtmlNode::new(self.config.spoiler.element.as_str()).with_text(text));
            }
            Segment::RawLine { text } => parent.append_text(text),
            Segment::Paragraph { children } => self.inline_all(parent, children),
            other => parent.push_child(self.block(other)),
        }
    }
}

/// Render a text segment's ranges as nested inline elements.
///
/// Uncovered text around ranges goes into `span`s. A range also takes the
/// single space that follows it unless the next range starts there.
fn render_text(parent: &mut HtmlNode, text: &str, formats: &[FormatRange]) {
    if formats.is_empty() {
        parent.append_text(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let slice = |from: usize, to: usize| -> String { chars[from..to].iter().collect() };
    let mut cursor = 0;

    for (index, range) in formats.iter().enumerate() {
        let start = range.start.clamp(cursor, chars.len());
        if start > cursor {
            parent.push_child(HtmlNode::new("span").with_text(slice(cursor, start)));
        }

        let mut end = range.end().clamp(start, chars.len());
        let next_start = formats.get(index + 1).map(|next| next.start);
        if chars.get(end) == Some(&' ') && next_start != Some(end) {
            end += 1;
        }

        let content = slice(start, end);
        match decode_weight(range.weight) {
            Some(stack) => {
                let tags: Vec<&str> = stack.iter().map(|tag| tag.name()).collect();
                push_nested(parent, &tags, &content);
            }
            None => {
                tracing::debug!(weight = range.weight, "Rendering unknown weight unstyled");
                parent.push_child(HtmlNode::new("span").with_text(content));
            }
        }
        cursor = end;
    }

    if cursor < chars.len() {
        parent.push_child(HtmlNode::new("span").with_text(slice(cursor, chars.len())));
    }
}

/// Append `text` inside the tag stack, reusing the last child at each level
/// when it has the same tag and nothing follows it.
fn push_nested(parent: &mut HtmlNode, tags: &[&str], text: &str) {
    let Some((outer, inner)) = tags.split_first() else {
        parent.append_text(text);
        return;
    };

    let reusable = parent
        .children
        .last()
        .is_some_and(|last| last.tag == *outer && last.tail.is_empty());
    if !reusable {
        parent.push_child(HtmlNode::new(*outer));
    }
    if let Some(target) = parent.children.last_mut() {
        push_nested(target, inner, text);
    }
}
