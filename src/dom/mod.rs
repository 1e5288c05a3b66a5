//! HTML parsing and the tree the sanitizer works on.
//!
//! Parsing is a capability behind the [`HtmlParser`] trait so the sanitizer
//! never depends on a particular backend:
//!
//! - [`Html5Parser`] (default, feature `html5ever`) delegates tag-soup
//!   recovery to html5ever via a TreeSink that builds the arena directly
//! - [`SoupParser`] is a pure tokenizer with no dependencies, for targets
//!   where html5ever is compiled out
//!
//! Both produce a [`Dom`] and share one serializer, so allow-list policy and
//! output shape are identical regardless of backend.

pub mod arena;
pub mod serialize;
pub mod soup;
#[cfg(feature = "html5ever")]
pub mod tree_sink;

pub use arena::{Attribute, Dom, Node, NodeData, NodeId};
pub use serialize::serialize_fragment;

/// A parser backend turning HTML text into a [`Dom`].
pub trait HtmlParser {
    /// Parse an HTML fragment leniently. Must not fail: malformed input is
    /// recovered into whatever tree the backend's rules produce.
    fn parse(&self, html: &str) -> Dom;
}

/// html5ever-backed parser (the default backend).
#[cfg(feature = "html5ever")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Parser;

#[cfg(feature = "html5ever")]
impl HtmlParser for Html5Parser {
    fn parse(&self, html: &str) -> Dom {
        tree_sink::parse_fragment(html)
    }
}

/// Dependency-free tokenizer backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoupParser;

impl HtmlParser for SoupParser {
    fn parse(&self, html: &str) -> Dom {
        soup::parse_fragment(html)
    }
}

/// Parse with the best backend the build provides.
#[cfg(feature = "html5ever")]
pub(crate) fn parse_fragment_default(html: &str) -> Dom {
    Html5Parser.parse(html)
}

#[cfg(not(feature = "html5ever"))]
pub(crate) fn parse_fragment_default(html: &str) -> Dom {
    SoupParser.parse(html)
}
