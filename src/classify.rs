//! Content classification for incoming raw text.
//!
//! Uses LazyLock to compile patterns once on first use. The predicates are
//! deliberately a flat set of documented patterns rather than a grammar:
//! they decide routing, not structure.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches a generic opening or closing tag anywhere in the text:
/// `<` or `</`, a letter, anything (across newlines), then `>`.
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)</?[a-z].*>").unwrap());

/// Matches any of the markdown constructs the renderer understands:
/// heading, bold, inline code, link, bullet item, numbered item.
static MARKDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(^\s{0,3}#{1,6}\s)|(\*\*[^*]+\*\*)|(__[^_]+__)|(`[^`]+`)|(\[[^\]]+\]\([^)]+\))|(^\s*[-*+]\s+)|(^\s*\d+\.\s+)",
    )
    .unwrap()
});

/// How a raw text value should be routed through the pipeline.
///
/// `looks_like_markdown` is diagnostic only: non-HTML input always goes
/// through the markdown renderer, whether or not a pattern matched, so that
/// plain text still comes out wrapped in paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Classification {
    /// Input is empty or whitespace-only; there is nothing to render.
    pub is_empty: bool,
    /// Input already contains HTML markup and skips the renderer.
    pub looks_like_html: bool,
    /// Input matches at least one markdown construct.
    pub looks_like_markdown: bool,
}

/// Classify already-entity-decoded text.
///
/// # Examples
///
/// ```
/// use borax::classify;
///
/// assert!(classify("<p>hi</p>").looks_like_html);
/// assert!(classify("# heading").looks_like_markdown);
/// assert!(classify("   ").is_empty);
/// ```
pub fn classify(text: &str) -> Classification {
    Classification {
        is_empty: text.trim().is_empty(),
        looks_like_html: HTML_TAG_RE.is_match(text),
        looks_like_markdown: MARKDOWN_RE.is_match(text),
    }
}
