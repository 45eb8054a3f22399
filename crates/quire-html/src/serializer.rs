//! HTML serializer for generated element trees.

use crate::tree::{HtmlNode, is_void};

/// Serialize nodes to an HTML string.
///
/// Void elements are written without a closing tag; every other element gets
/// an explicit one, even when empty.
#[must_use]
pub fn serialize(nodes: &[HtmlNode]) -> String {
    let mut out = String::with_capacity(256);
    for node in nodes {
        serialize_node(node, &mut out);
    }
    out
}

fn serialize_node(node: &HtmlNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);

    for (key, value) in &node.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }
    out.push('>');

    if !is_void(&node.tag) {
        escape_into(&node.text, false, out);
        for child in &node.children {
            serialize_node(child, out);
        }
        out.push_str("</");
        out.push_str(&node.tag);
        out.push('>');
    }

    escape_into(&node.tail, false, out);
}

/// Escape markup characters, and double quotes inside attribute values.
fn escape_into(text: &str, in_attr: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_nested_with_tail() {
        let strong = HtmlNode::new("strong").with_text("Bold").with_tail(" text");
        let p = HtmlNode::new("p").with_children(vec![strong]);
        assert_eq!(serialize(&[p]), "<p><strong>Bold</strong> text</p>");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let p = HtmlNode::new("p").with_children(vec![HtmlNode::new("br")]);
        let img = HtmlNode::new("img").with_attr("data-asset-id", "a1");
        assert_eq!(
            serialize(&[p, img]),
            r#"<p><br></p><img data-asset-id="a1">"#
        );
    }

    #[test]
    fn test_empty_element_keeps_closing_tag() {
        assert_eq!(serialize(&[HtmlNode::new("span")]), "<span></span>");
    }

    #[test]
    fn test_escaping() {
        let a = HtmlNode::new("a")
            .with_attr("href", "https://x.example/?q=\"a\"&b=<c>")
            .with_text("1 < 2 & \"quoted\"");
        assert_eq!(
            serialize(&[a]),
            r#"<a href="https://x.example/?q=&quot;a&quot;&amp;b=&lt;c&gt;">1 &lt; 2 &amp; "quoted"</a>"#
        );
    }

    #[test]
    fn test_newlines_preserved() {
        let pre = HtmlNode::new("pre").with_text("a\n    b\n");
        assert_eq!(serialize(&[pre]), "<pre>a\n    b\n</pre>");
    }
}
