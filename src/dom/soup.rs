//! Permissive tag-soup tokenizer.
//!
//! Fallback parser for targets where html5ever is compiled out. One forward
//! pass, no error reporting: malformed input is recovered from the way
//! lenient HTML parsers recover. The notable rules:
//!
//! - tag and attribute names are lowercased; duplicate attributes keep the
//!   first value
//! - character references are decoded in text and attribute values
//! - a trailing `/` in a start tag is ignored (HTML semantics), so void
//!   elements come from the void-element table, not from `/>`
//! - `script`, `style`, `textarea`, and `title` capture raw text until
//!   their matching close tag
//! - a new `li` closes an open `li`; block-level openers close an open `p`
//! - unmatched close tags are ignored; open elements are implicitly closed
//!   at end of input
//! - a start tag left unterminated at end of input becomes literal text
//!   rather than being dropped
//!
//! Comments, doctypes, and processing instructions are consumed and
//! discarded; the sanitizer would remove them anyway.

use memchr::memchr;

use crate::entities::decode_entities;

use super::arena::{Attribute, Dom, NodeId};
use super::serialize::is_void_element;

/// Elements whose content is captured as raw text up to the close tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Raw-text elements whose captured content still decodes references.
const RCDATA_ELEMENTS: &[&str] = &["textarea", "title"];

/// Start tags that imply the end of an open `p` element.
const P_CLOSERS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "ul",
];

/// Parse an HTML fragment leniently into a [`Dom`].
///
/// The fragment root is the document node itself; parsed content hangs
/// directly under it.
pub fn parse_fragment(html: &str) -> Dom {
    // Input stream preprocessing: normalize line endings like a browser.
    let normalized = html.replace("\r\n", "\n").replace('\r', "\n");
    let mut tokenizer = Tokenizer {
        dom: Dom::new(),
        stack: Vec::new(),
    };
    tokenizer.run(&normalized);
    tokenizer.dom
}

struct OpenElement {
    id: NodeId,
    name: String,
}

struct Tokenizer {
    dom: Dom,
    stack: Vec<OpenElement>,
}

impl Tokenizer {
    fn run(&mut self, html: &str) {
        let bytes = html.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            match memchr(b'<', &bytes[pos..]) {
                None => {
                    self.text(&html[pos..]);
                    break;
                }
                Some(0) => {
                    pos = self.tag(html, pos);
                }
                Some(offset) => {
                    self.text(&html[pos..pos + offset]);
                    pos += offset;
                }
            }
        }
    }

    fn current_parent(&self) -> NodeId {
        self.stack
            .last()
            .map(|open| open.id)
            .unwrap_or(self.dom.root())
    }

    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = decode_entities(raw);
        let parent = self.current_parent();
        self.dom.append_text(parent, &decoded);
    }

    /// Handle the markup starting with `<` at `pos`; returns the next
    /// position to resume scanning from.
    fn tag(&mut self, html: &str, pos: usize) -> usize {
        let bytes = html.as_bytes();
        let Some(&next) = bytes.get(pos + 1) else {
            self.text("<");
            return html.len();
        };

        match next {
            b'/' => self.close_tag(html, pos),
            b'!' => skip_declaration(html, pos),
            b'?' => skip_until_gt(html, pos + 2),
            c if c.is_ascii_alphabetic() => self.open_tag(html, pos),
            _ => {
                // Not markup after all; `<` is literal text.
                self.text("<");
                pos + 1
            }
        }
    }

    fn close_tag(&mut self, html: &str, pos: usize) -> usize {
        let bytes = html.as_bytes();
        let Some(offset) = memchr(b'>', &bytes[pos + 2..]) else {
            // `</...` running to end of input: keep it as visible text.
            self.text(&html[pos..]);
            return html.len();
        };
        let gt = pos + 2 + offset;

        let name: String = html[pos + 2..gt]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if !name.is_empty()
            && let Some(index) = self.stack.iter().rposition(|open| open.name == name)
        {
            self.stack.truncate(index);
        }
        gt + 1
    }

    fn open_tag(&mut self, html: &str, pos: usize) -> usize {
        let Some(gt) = find_tag_end(html, pos + 1) else {
            // Unterminated start tag: emit the remainder as literal text.
            self.text(&html[pos..]);
            return html.len();
        };
        let tag_src = &html[pos + 1..gt];

        let name_len = tag_src
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
            .count();
        let name = tag_src[..name_len].to_ascii_lowercase();
        let attrs = parse_attributes(&tag_src[name_len..]);

        // Implied end tags.
        if let Some(top) = self.stack.last() {
            if name == "li" && top.name == "li" {
                self.stack.pop();
            } else if top.name == "p" && P_CLOSERS.contains(&name.as_str()) {
                self.stack.pop();
            }
        }

        let parent = self.current_parent();
        let id = self.dom.create_element(name.clone(), attrs);
        self.dom.append(parent, id);

        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            return self.capture_raw_text(html, gt + 1, id, &name);
        }
        if !is_void_element(&name) {
            self.stack.push(OpenElement { id, name });
        }
        gt + 1
    }

    /// Capture everything up to `</name` as the element's text content.
    fn capture_raw_text(&mut self, html: &str, from: usize, id: NodeId, name: &str) -> usize {
        let needle = format!("</{name}");
        let (content, resume) = match find_close_tag(&html[from..], &needle) {
            Some((end, after_close)) => (&html[from..from + end], from + after_close),
            None => (&html[from..], html.len()),
        };

        if content.is_empty() {
            return resume;
        }
        if RCDATA_ELEMENTS.contains(&name) {
            let decoded = decode_entities(content);
            self.dom.append_text(id, &decoded);
        } else {
            self.dom.append_text(id, content);
        }
        resume
    }
}

/// Find the `>` ending a start tag, honoring quoted attribute values.
fn find_tag_end(html: &str, from: usize) -> Option<usize> {
    let bytes = html.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match (quote, b) {
            (None, b'>') => return Some(i),
            (None, b'"' | b'\'') => quote = Some(b),
            (Some(q), _) if q == b => quote = None,
            _ => {}
        }
    }
    None
}

/// Parse the attribute section of a start tag (everything after the name).
fn parse_attributes(src: &str) -> Vec<Attribute> {
    let bytes = src.as_bytes();
    let mut attrs: Vec<Attribute> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        // Skip whitespace, stray slashes, and stray equals signs.
        if bytes[i].is_ascii_whitespace() || bytes[i] == b'/' || bytes[i] == b'=' {
            i += 1;
            continue;
        }

        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && bytes[i] != b'='
            && bytes[i] != b'/'
        {
            i += 1;
        }
        let name = src[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = String::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let q = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != q {
                    i += 1;
                }
                value = decode_entities(&src[value_start..i]).into_owned();
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = decode_entities(&src[value_start..i]).into_owned();
            }
        }

        if !name.is_empty() && !attrs.iter().any(|a| a.name == name) {
            attrs.push(Attribute { name, value });
        }
    }

    attrs
}

/// Skip `<!-- -->` comments and `<!...>` declarations.
fn skip_declaration(html: &str, pos: usize) -> usize {
    if html[pos..].starts_with("<!--") {
        match html[pos + 4..].find("-->") {
            Some(end) => pos + 4 + end + 3,
            None => html.len(),
        }
    } else {
        skip_until_gt(html, pos + 2)
    }
}

fn skip_until_gt(html: &str, from: usize) -> usize {
    match memchr(b'>', &html.as_bytes()[from.min(html.len())..]) {
        Some(offset) => from + offset + 1,
        None => html.len(),
    }
}

/// Find a raw-text close tag in `haystack`, case-insensitively.
///
/// Returns `(content_end, resume)` where `content_end` is where the raw
/// content stops and `resume` is just past the close tag's `>`. The needle
/// must be followed by `>`, whitespace, `/`, or end of input to count.
fn find_close_tag(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return None;
    }

    let mut start = 0;
    while start + n.len() <= h.len() {
        let Some(found) = h[start..]
            .windows(n.len())
            .position(|window| window.eq_ignore_ascii_case(n))
        else {
            return None;
        };
        let at = start + found;
        let after = at + n.len();
        let valid = match h.get(after) {
            None => true,
            Some(&b) => b == b'>' || b == b'/' || b.is_ascii_whitespace(),
        };
        if valid {
            let resume = skip_until_gt(haystack, after);
            return Some((at, resume));
        }
        start = at + 1;
    }
    None
}
