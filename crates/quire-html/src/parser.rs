//! HTML fragment parser.
//!
//! Reads markup with an XML event reader, tolerating the HTML features an
//! editor snapshot contains: void elements without a closing slash, unquoted
//! or valueless attributes, upper-case names and named entities. Anything else
//! that does not nest properly is rejected.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::convert_html_entities;
use crate::error::HtmlError;
use crate::tree::{HtmlNode, is_void};

/// Tag of the synthetic root that holds top-level nodes.
pub const ROOT_TAG: &str = "#root";

/// Parse HTML fragments into an [`HtmlNode`] tree.
#[derive(Debug, Clone)]
pub struct HtmlParser {
    max_depth: usize,
}

impl HtmlParser {
    /// Create a parser accepting at most `max_depth` nested elements.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse an HTML fragment.
    ///
    /// Returns a synthetic [`ROOT_TAG`] node whose children are the top-level
    /// elements; top-level text lands in the root's `text` and children's
    /// `tail`. Building the tree uses an explicit stack, so input depth only
    /// costs heap up to the configured limit.
    ///
    /// # Errors
    ///
    /// Returns an error on tokenizer failures, mismatched or unclosed tags, and
    /// nesting beyond the limit.
    pub fn parse(&self, html: &str) -> Result<HtmlNode, HtmlError> {
        let html = convert_html_entities(html);

        let mut reader = Reader::from_str(&html);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;

        let mut stack = vec![HtmlNode::new(ROOT_TAG)];

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let node = open_element(&reader, &e)?;
                    if is_void(&node.tag) {
                        attach(&mut stack, node);
                    } else {
                        if stack.len() > self.max_depth {
                            return Err(HtmlError::TooDeep {
                                limit: self.max_depth,
                            });
                        }
                        stack.push(node);
                    }
                }
                Event::Empty(e) => {
                    let node = open_element(&reader, &e)?;
                    attach(&mut stack, node);
                }
                Event::End(e) => {
                    let tag = decode_name(&reader, e.name().as_ref())?;
                    if is_void(&tag) {
                        continue;
                    }
                    if stack.len() == 1 {
                        return Err(HtmlError::UnexpectedEnd(tag));
                    }
                    let node = stack.pop().ok_or_else(|| HtmlError::UnexpectedEnd(tag.clone()))?;
                    if node.tag != tag {
                        return Err(HtmlError::MismatchedEnd {
                            expected: node.tag,
                            found: tag,
                        });
                    }
                    attach(&mut stack, node);
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?;
                    append_text(&mut stack, &text);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?;
                    append_text(&mut stack, &decode_entity(&entity));
                }
                Event::CData(e) => {
                    append_text(&mut stack, &String::from_utf8_lossy(&e));
                }
                Event::Eof => break,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }

        if stack.len() > 1 {
            let open = stack.pop().map(|node| node.tag).unwrap_or_default();
            return Err(HtmlError::Unclosed(open));
        }
        Ok(stack.pop().unwrap_or_else(|| HtmlNode::new(ROOT_TAG)))
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Build a node from a start tag.
fn open_element(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<HtmlNode, HtmlError> {
    let mut node = HtmlNode::new(decode_name(reader, e.name().as_ref())?);
    for attr in e.html_attributes().flatten() {
        let key = decode_name(reader, attr.key.as_ref())?;
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            Cow::into_owned,
        );
        node.attrs.push((key, value));
    }
    Ok(node)
}

/// Decode an element or attribute name to lowercase.
fn decode_name(reader: &Reader<&[u8]>, name: &[u8]) -> Result<String, HtmlError> {
    Ok(reader.decoder().decode(name)?.to_ascii_lowercase())
}

/// Attach a finished node to the innermost open element.
fn attach(stack: &mut [HtmlNode], node: HtmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
    }
}

/// Append text to the innermost open element.
fn append_text(stack: &mut [HtmlNode], text: &str) {
    if let Some(parent) = stack.last_mut() {
        parent.append_text(text);
    }
}

/// Decode an XML entity reference to its character value.
fn decode_entity(entity: &str) -> Cow<'static, str> {
    match entity {
        "lt" => Cow::Borrowed("<"),
        "gt" => Cow::Borrowed(">"),
        "amp" => Cow::Borrowed("&"),
        "apos" => Cow::Borrowed("'"),
        "quot" => Cow::Borrowed("\""),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32).map_or_else(
                || Cow::Owned(format!("&{entity};")),
                |c| Cow::Owned(c.to_string()),
            )
        }
        _ => Cow::Owned(format!("&{entity};")),
    }
}
