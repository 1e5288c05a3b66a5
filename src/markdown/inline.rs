//! Inline markup substitution within a single rendered line.
//!
//! Patterns are compiled once on first use, in the same style as the cached
//! predicates in [`crate::classify`]. They run on already-escaped text (see
//! [`super::escape`]); substitution order is fixed: code, bold, italic, link.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Matches `` `code` `` spans.
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Matches `**bold**` spans.
static BOLD_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// Matches `__bold__` spans.
static BOLD_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());

/// Matches `*italic*` spans.
static EM_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Matches `_italic_` spans.
static EM_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());

/// Matches `[text](url)` links. Only `http`/`https` URLs are recognized
/// here; looser schemes are left to the sanitizer's URL policy and never
/// become links at render time.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").unwrap());

/// Apply inline substitutions to one escaped line.
///
/// Unbalanced markers simply fail to match and pass through as literal
/// (escaped) text.
pub fn render_inline(line: &str) -> String {
    let line = CODE_RE.replace_all(line, "<code>$1</code>");
    let line = BOLD_STAR_RE.replace_all(&line, "<strong>$1</strong>");
    let line = BOLD_UNDER_RE.replace_all(&line, "<strong>$1</strong>");
    let line = EM_STAR_RE.replace_all(&line, "<em>$1</em>");
    let line = EM_UNDER_RE.replace_all(&line, "<em>$1</em>");
    let line = LINK_RE.replace_all(&line, r#"<a href="$2">$1</a>"#);
    line.into_owned()
}
