//! Line-oriented markdown rendering.
//!
//! This is a deliberately restricted subset: headings, blockquotes, flat
//! bullet/numbered lists, and paragraphs, with inline code/bold/italic/link
//! spans. One pass over the lines, no backtracking; the only state carried
//! between lines is the open list context.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::escape::escape_html;
use super::inline::render_inline;

/// Matches a bullet list item: `- content`, `* content`, or `+ content`.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.+)$").unwrap());

/// Matches a numbered list item: `1. content`. Content may be empty; a line
/// of digits, period, and a space still starts an item.
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());

/// Matches a heading: one to six `#` then a space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(#{1,6})\s+(.+)$").unwrap());

/// Matches a block quote line: `> content`.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*>\s+(.+)$").unwrap());

/// Which list element, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListContext {
    None,
    Unordered,
    Ordered,
}

impl ListContext {
    /// Emit the closing tag for the open list, if one is open.
    fn close(&mut self, out: &mut String) {
        match *self {
            ListContext::Unordered => out.push_str("</ul>"),
            ListContext::Ordered => out.push_str("</ol>"),
            ListContext::None => {}
        }
        *self = ListContext::None;
    }
}

/// Render markdown text to an HTML fragment.
///
/// Lists never span non-list lines: a blank line, heading, blockquote, or
/// paragraph always closes the open list first, and switching between bullet
/// and numbered items closes and reopens the list element.
///
/// # Examples
///
/// ```
/// use borax::render_markdown;
///
/// assert_eq!(render_markdown("# Title"), "<h1>Title</h1>");
/// assert_eq!(
///     render_markdown("- a\n- b"),
///     "<ul><li>a</li><li>b</li></ul>"
/// );
/// ```
pub fn render_markdown(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len() + normalized.len() / 4);
    let mut list = ListContext::None;

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            list.close(&mut out);
            continue;
        }

        if let Some(caps) = BULLET_RE.captures(line) {
            if list == ListContext::Ordered {
                list.close(&mut out);
            }
            if list != ListContext::Unordered {
                out.push_str("<ul>");
                list = ListContext::Unordered;
            }
            push_tag(&mut out, "li", &caps[1]);
            continue;
        }

        if let Some(caps) = ORDERED_RE.captures(line) {
            if list == ListContext::Unordered {
                list.close(&mut out);
            }
            if list != ListContext::Ordered {
                out.push_str("<ol>");
                list = ListContext::Ordered;
            }
            push_tag(&mut out, "li", &caps[1]);
            continue;
        }

        list.close(&mut out);

        if let Some(caps) = HEADING_RE.captures(line) {
            let level = caps[1].len();
            let tag = format!("h{level}");
            push_tag(&mut out, &tag, &caps[2]);
            continue;
        }

        if let Some(caps) = QUOTE_RE.captures(line) {
            push_tag(&mut out, "blockquote", &caps[1]);
            continue;
        }

        push_tag(&mut out, "p", line);
    }

    list.close(&mut out);
    out
}

/// Emit `<tag>` with escaped, inline-rendered content.
fn push_tag(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&render_inline(&escape_html(content)));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
