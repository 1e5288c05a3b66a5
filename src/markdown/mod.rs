//! Restricted markdown to HTML-fragment rendering.
//!
//! The design separates pure string transformation into small layers:
//!
//! - [`escape`]: HTML escaping applied to raw line content first
//! - [`inline`]: code/bold/italic/link substitution on escaped text
//! - [`render`]: the line loop and list-context state machine
//!
//! The renderer produces fragments for the sanitizer, never final output:
//! [`crate::to_safe_html`] always runs the result through
//! [`crate::sanitize::sanitize`].

mod escape;
mod inline;
mod render;

pub use escape::escape_html;
pub use inline::render_inline;
pub use render::render_markdown;
