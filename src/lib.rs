//! # borax
//!
//! A small, fast library for turning untrusted rich text into safe HTML.
//!
//! ## Features
//!
//! - Renders a restricted markdown subset (headings, lists, blockquotes,
//!   bold/italic/code/links) to HTML fragments
//! - Sanitizes arbitrary tag-soup HTML against fixed tag/attribute/URL
//!   allow-lists, hardening links with `rel="noopener noreferrer"`
//! - Classifies raw input so HTML passes straight to the sanitizer while
//!   everything else is rendered first
//! - Pure and synchronous: no I/O, no shared mutable state, safe to call
//!   concurrently
//!
//! ## Quick Start
//!
//! ```
//! use borax::to_safe_html;
//!
//! // Markdown in, safe HTML out
//! assert_eq!(
//!     to_safe_html("# Hello\n- a\n- b"),
//!     "<h1>Hello</h1><ul><li>a</li><li>b</li></ul>"
//! );
//!
//! // Hostile HTML is defanged, text content kept
//! assert_eq!(
//!     to_safe_html("<p>hi</p><script>steal()</script>"),
//!     "<p>hi</p>steal()"
//! );
//! ```
//!
//! ## Working with the stages
//!
//! Each pipeline stage is exposed on its own for callers that already know
//! what they have:
//!
//! ```
//! use borax::{classify, render_markdown, sanitize};
//!
//! assert!(classify("<div>x</div>").looks_like_html);
//! assert_eq!(render_markdown("> quoted"), "<blockquote>quoted</blockquote>");
//! assert_eq!(sanitize("<img src=\"javascript:alert(1)\">"), "<img>");
//! ```

pub mod classify;
pub mod dom;
pub mod entities;
pub mod markdown;
pub mod sanitize;

mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{Classification, classify};
pub use entities::decode_entities;
pub use markdown::render_markdown;
pub use pipeline::to_safe_html;
pub use sanitize::{sanitize, sanitize_with};
