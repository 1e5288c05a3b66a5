//! The top-level render-and-sanitize pipeline.

use crate::classify::classify;
use crate::entities::decode_entities;
use crate::markdown::render_markdown;
use crate::sanitize::sanitize;

/// Turn untrusted rich text into safe, allow-listed HTML.
///
/// Empty or whitespace-only input yields an empty string. Otherwise the
/// input is entity-decoded once and classified: text containing HTML markup
/// is sanitized as-is; everything else goes through the markdown renderer
/// first and the fragment is sanitized. Plain text without any markdown
/// still takes the renderer path, so it comes out wrapped in paragraphs.
///
/// Reentrant and infallible; safe to call from multiple threads.
///
/// # Examples
///
/// ```
/// use borax::to_safe_html;
///
/// assert_eq!(to_safe_html("   "), "");
/// assert_eq!(to_safe_html("# Hi"), "<h1>Hi</h1>");
/// assert_eq!(to_safe_html("just text"), "<p>just text</p>");
/// assert_eq!(to_safe_html("<p>x</p><script>y</script>"), "<p>x</p>y");
/// ```
pub fn to_safe_html(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(trimmed);
    if classify(&decoded).looks_like_html {
        return sanitize(&decoded);
    }
    sanitize(&render_markdown(&decoded))
}
