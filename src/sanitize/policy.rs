//! The allow-lists.
//!
//! Process-wide, read-only, built once on first use. Everything absent from
//! these tables is rejected; there is no configuration surface.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags that survive sanitization. Anything else is stripped to its text.
static ALLOWED_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a",
        "p",
        "br",
        "strong",
        "em",
        "u",
        "s",
        "code",
        "pre",
        "blockquote",
        "ul",
        "ol",
        "li",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "span",
        "div",
        "img",
        "video",
        "audio",
        "source",
        "hr",
    ]
    .into_iter()
    .collect()
});

/// Attributes that survive on retained elements. Applied to every element;
/// there is no per-tag table.
static ALLOWED_ATTRS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["href", "src", "alt", "title", "target", "rel", "controls"]
        .into_iter()
        .collect()
});

/// Prefixes an `href`/`src` value may start with.
const SAFE_URL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "/", "#"];

/// Check whether a (lowercase) tag name is retained.
pub fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_TAGS.contains(name.to_ascii_lowercase().as_str())
}

/// Check whether an attribute survives on a retained element.
///
/// Event handlers (`on*`) and `style` are rejected by name even though the
/// allow-list could never admit them.
pub fn is_allowed_attr(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") || name == "style" {
        return false;
    }
    ALLOWED_ATTRS.contains(name.as_str())
}

/// Check whether an attribute is URL-bearing and subject to the scheme
/// policy.
pub fn is_url_attr(name: &str) -> bool {
    name.eq_ignore_ascii_case("href") || name.eq_ignore_ascii_case("src")
}

/// Check a URL value against the scheme policy.
///
/// The value is trimmed and matched case-insensitively against the allowed
/// prefixes. `javascript:`, `data:`, `vbscript:` and every other scheme fall
/// through to rejection.
pub fn is_safe_url(value: &str) -> bool {
    let value = value.trim();
    SAFE_URL_PREFIXES.iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
