//! Element tree to lines.
//!
//! Top-level elements are classified into block attributes; their text leaves
//! become chunks carrying the styles, link and spoiler state of their
//! ancestors. A `br` among text starts a new line of the same block.

use quire_config::SpoilerConfig;
use quire_inline::apply_tag;
use quire_model::{BlockAttr, Chunk, ImageRef, Line, StyleSet};

use crate::tree::HtmlNode;

/// Converts a parsed element tree into lines.
#[derive(Debug, Clone, Copy)]
pub struct LineCollector<'a> {
    spoiler: &'a SpoilerConfig,
}

/// Inline state inherited from ancestors.
#[derive(Debug, Clone, Default)]
struct Inherited<'n> {
    styles: StyleSet,
    link: Option<&'n str>,
    spoiler: bool,
}

impl<'a> LineCollector<'a> {
    /// Create a collector recognizing spoilers per `spoiler`.
    #[must_use]
    pub fn new(spoiler: &'a SpoilerConfig) -> Self {
        Self { spoiler }
    }

    /// Collect the lines of a parsed fragment's root node.
    #[must_use]
    pub fn collect(&self, root: &HtmlNode) -> Vec<Line> {
        let mut lines = Vec::new();
        self.collect_children(root, &mut lines);
        tracing::debug!(lines = lines.len(), "Collected lines from HTML");
        lines
    }

    fn collect_children(&self, parent: &HtmlNode, lines: &mut Vec<Line>) {
        push_loose_text(&parent.text, lines);
        for node in &parent.children {
            self.collect_block(node, lines);
            push_loose_text(&node.tail, lines);
        }
    }

    fn collect_block(&self, node: &HtmlNode, lines: &mut Vec<Line>) {
        match node.tag.as_str() {
            "h1" => self.push_lines(&BlockAttr::Header(1), node, lines),
            tag @ ("ul" | "ol") => {
                let block = BlockAttr::List {
                    ordered: tag == "ol",
                };
                for li in node.children.iter().filter(|child| child.tag == "li") {
                    self.push_lines(&block, li, lines);
                }
            }
            "blockquote" => self.push_lines(&BlockAttr::Blockquote, node, lines),
            "pre" => push_code_lines(&node.text_content(), lines),
            "img" => push_image(node, lines),
            _ if is_blockquote_wrapper(node) => self.collect_children(node, lines),
            _ => match node.children.iter().find(|child| child.tag == "img") {
                Some(img) => push_image(img, lines),
                None => self.push_lines(&BlockAttr::Paragraph, node, lines),
            },
        }
    }

    fn push_lines(&self, block: &BlockAttr, node: &HtmlNode, lines: &mut Vec<Line>) {
        lines.extend(
            self.chunk_lines(node)
                .into_iter()
                .map(|chunks| Line::new(block.clone(), chunks)),
        );
    }

    /// Text leaves of an element in document order, split at `br`.
    fn chunk_lines(&self, node: &HtmlNode) -> Vec<Vec<Chunk>> {
        let mut groups = vec![Vec::new()];
        self.walk(node, &Inherited::default(), &mut groups);
        // A closing `br` only holds an otherwise empty line open.
        if groups.len() > 1 && groups.last().is_some_and(Vec::is_empty) {
            groups.pop();
        }
        groups
    }

    fn walk<'n>(
        &self,
        node: &'n HtmlNode,
        inherited: &Inherited<'n>,
        groups: &mut Vec<Vec<Chunk>>,
    ) {
        let state = self.enter(node, inherited);
        push_chunk(&node.text, &state, groups);
        for child in &node.children {
            if child.tag == "br" {
                groups.push(Vec::new());
            } else {
                self.walk(child, &state, groups);
            }
            push_chunk(&child.tail, &state, groups);
        }
    }

    fn enter<'n>(&self, node: &'n HtmlNode, inherited: &Inherited<'n>) -> Inherited<'n> {
        let link = match node.attr("href") {
            Some(href) if node.tag == "a" => Some(href),
            _ => inherited.link,
        };
        Inherited {
            styles: apply_tag(inherited.styles, &node.tag),
            link,
            spoiler: inherited.spoiler || self.is_spoiler(node),
        }
    }

    fn is_spoiler(&self, node: &HtmlNode) -> bool {
        if node.tag == self.spoiler.element {
            return true;
        }
        node.attr("style").is_some_and(|style| {
            let (color, background) = style_colors(style);
            self.spoiler.matches_colors(color, background)
        })
    }
}

fn push_chunk(text: &str, state: &Inherited<'_>, groups: &mut [Vec<Chunk>]) {
    if text.is_empty() {
        return;
    }
    let Some(chunks) = groups.last_mut() else {
        return;
    };
    chunks.push(Chunk {
        text: text.to_owned(),
        styles: state.styles,
        link: state.link.map(str::to_owned),
        spoiler: state.spoiler,
    });
}

/// Code lines of one `pre`.
///
/// The newline closing a `pre` becomes a chunkless line. The segmenter drops
/// it at the end of a code run; a directly following `pre` drops it here.
fn push_code_lines(text: &str, lines: &mut Vec<Line>) {
    if lines
        .last()
        .is_some_and(|line| line.block == BlockAttr::CodeBlock && line.chunks.is_empty())
    {
        lines.pop();
    }
    let body = text.strip_suffix('\n');
    lines.extend(
        body.unwrap_or(text)
            .split('\n')
            .map(|line| Line::new(BlockAttr::CodeBlock, vec![Chunk::plain(line)])),
    );
    if body.is_some() {
        lines.push(Line::new(BlockAttr::CodeBlock, Vec::new()));
    }
}

/// Text outside any element becomes its own paragraph unless blank.
fn push_loose_text(text: &str, lines: &mut Vec<Line>) {
    if !text.trim().is_empty() {
        lines.push(Line::paragraph(vec![Chunk::plain(text)]));
    }
}

fn push_image(img: &HtmlNode, lines: &mut Vec<Line>) {
    let src = img.attr("src").filter(|src| !src.is_empty());
    let asset_id = img.attr("data-asset-id").filter(|id| !id.is_empty());

    let (Some(_), Some(asset_id)) = (src, asset_id) else {
        tracing::debug!(
            has_src = src.is_some(),
            has_asset_id = asset_id.is_some(),
            "Skipping image without source or asset id"
        );
        return;
    };

    lines.push(Line::new(
        BlockAttr::Image(ImageRef {
            asset_id: asset_id.to_owned(),
            caption: img
                .attr("data-caption")
                .filter(|caption| !caption.is_empty())
                .map(str::to_owned),
        }),
        Vec::new(),
    ));
}

/// Element whose only element children are blockquotes, as generated for
/// blockquote runs.
fn is_blockquote_wrapper(node: &HtmlNode) -> bool {
    node.tag != "blockquote"
        && !node.children.is_empty()
        && node.children.iter().all(|child| child.tag == "blockquote")
}

/// Foreground and background colors declared in an inline `style`.
fn style_colors(style: &str) -> (Option<&str>, Option<&str>) {
    let mut color = None;
    let mut background = None;
    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        match property.trim().to_ascii_lowercase().as_str() {
            "color" => color = Some(value.trim()),
            "background" | "background-color" => background = Some(value.trim()),
            _ => {}
        }
    }
    (color, background)
}
