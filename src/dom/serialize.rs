//! Fragment serialization back to an HTML string.
//!
//! Shared by both parser backends so that the sanitizer's output is
//! byte-identical regardless of which one built the tree. Text nodes escape
//! `& < >`; attribute values additionally escape `"`. Comments and doctypes
//! are never emitted.

use super::arena::{Dom, NodeData, NodeId};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Serialize the children of the fragment root to an HTML string.
pub fn serialize_fragment(dom: &Dom) -> String {
    let mut out = String::new();
    for child in dom.children(dom.root()) {
        write_node(dom, child, &mut out);
    }
    out
}

fn write_node(dom: &Dom, id: NodeId, out: &mut String) {
    match dom.get(id).map(|n| &n.data) {
        Some(NodeData::Text(text)) => write_escaped_text(text, out),
        Some(NodeData::Element { name, attrs }) => {
            out.push('<');
            out.push_str(name);
            for attr in attrs {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                write_escaped_attr(&attr.value, out);
                out.push('"');
            }
            out.push('>');
            if is_void_element(name) {
                return;
            }
            for child in dom.children(id) {
                write_node(dom, child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        // Comments, doctypes, and the document node itself are not emitted.
        _ => {}
    }
}

fn write_escaped_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn write_escaped_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::arena::Attribute;

    #[test]
    fn test_serialize_nested() {
        let mut dom = Dom::new();
        let p = dom.create_element("p".to_string(), vec![]);
        let strong = dom.create_element("strong".to_string(), vec![]);
        dom.append(dom.document(), p);
        dom.append_text(p, "a ");
        dom.append(p, strong);
        dom.append_text(strong, "b");

        assert_eq!(serialize_fragment(&dom), "<p>a <strong>b</strong></p>");
    }

    #[test]
    fn test_serialize_attributes() {
        let mut dom = Dom::new();
        let a = dom.create_element(
            "a".to_string(),
            vec![Attribute {
                name: "href".to_string(),
                value: "https://example.com/?a=1&b=2".to_string(),
            }],
        );
        dom.append(dom.document(), a);
        dom.append_text(a, "link");

        assert_eq!(
            serialize_fragment(&dom),
            r#"<a href="https://example.com/?a=1&amp;b=2">link</a>"#
        );
    }

    #[test]
    fn test_serialize_escapes_text() {
        let mut dom = Dom::new();
        let p = dom.create_element("p".to_string(), vec![]);
        dom.append(dom.document(), p);
        dom.append_text(p, "a < b & c > d");

        assert_eq!(serialize_fragment(&dom), "<p>a &lt; b &amp; c &gt; d</p>");
    }

    #[test]
    fn test_serialize_escapes_attr_quotes() {
        let mut dom = Dom::new();
        let img = dom.create_element(
            "img".to_string(),
            vec![Attribute {
                name: "alt".to_string(),
                value: "say \"hi\"".to_string(),
            }],
        );
        dom.append(dom.document(), img);

        assert_eq!(serialize_fragment(&dom), r#"<img alt="say &quot;hi&quot;">"#);
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let mut dom = Dom::new();
        let br = dom.create_element("br".to_string(), vec![]);
        let hr = dom.create_element("hr".to_string(), vec![]);
        dom.append(dom.document(), br);
        dom.append(dom.document(), hr);

        assert_eq!(serialize_fragment(&dom), "<br><hr>");
    }

    #[test]
    fn test_comments_and_doctypes_dropped() {
        let mut dom = Dom::new();
        let comment = dom.create_comment("secret".to_string());
        let doctype = dom.create_doctype("html".to_string());
        let p = dom.create_element("p".to_string(), vec![]);
        dom.append(dom.document(), comment);
        dom.append(dom.document(), doctype);
        dom.append(dom.document(), p);
        dom.append_text(p, "x");

        assert_eq!(serialize_fragment(&dom), "<p>x</p>");
    }
}
