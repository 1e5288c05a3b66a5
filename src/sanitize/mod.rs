//! Allow-list HTML sanitization.
//!
//! The input is parsed leniently, the tree is transformed in place, and the
//! result is serialized back to a string. Transformation rules:
//!
//! - elements outside the tag allow-list are replaced by a text node holding
//!   their descendant text (tag stripped, content kept, never dropped
//!   silently)
//! - comments and doctypes are removed
//! - attributes outside the attribute allow-list are removed, as is `style`
//!   and anything named `on*`
//! - `href`/`src` values failing the URL scheme policy cost the attribute,
//!   not the element
//! - every retained `<a>` gets `target="_blank"` unless a target is already
//!   set, and `rel="noopener noreferrer"` unconditionally
//!
//! `sanitize` is idempotent: its output parses back to an equivalent tree
//! and survives a second pass unchanged.

pub mod policy;

use crate::dom::{self, Dom, HtmlParser, NodeData, NodeId, serialize_fragment};

/// Sanitize an HTML string using the default parser backend.
///
/// # Examples
///
/// ```
/// use borax::sanitize;
///
/// assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
/// assert_eq!(
///     sanitize(r#"<p onclick="x()">hi</p>"#),
///     "<p>hi</p>"
/// );
/// ```
pub fn sanitize(html: &str) -> String {
    let mut dom = dom::parse_fragment_default(html);
    let root = dom.root();
    clean_children(&mut dom, root);
    serialize_fragment(&dom)
}

/// Sanitize with an explicit parser backend.
pub fn sanitize_with<P: HtmlParser>(parser: &P, html: &str) -> String {
    let mut dom = parser.parse(html);
    let root = dom.root();
    clean_children(&mut dom, root);
    serialize_fragment(&dom)
}

/// What the policy walk decided to do with one node.
enum Disposition {
    /// Text passes through untouched.
    Keep,
    /// Comments and doctypes are removed outright.
    Remove,
    /// Elements are cleaned (or stripped to text) by tag name.
    Element(String),
}

/// Apply the policy to every child of `parent`, recursing into retained
/// elements. Children are snapshotted first because disallowed nodes are
/// spliced out of the sibling chain as we go.
fn clean_children(dom: &mut Dom, parent: NodeId) {
    let children: Vec<NodeId> = dom.children(parent).collect();

    for id in children {
        let disposition = match dom.get(id).map(|n| &n.data) {
            Some(NodeData::Comment(_) | NodeData::Doctype(_)) => Disposition::Remove,
            Some(NodeData::Element { name, .. }) => Disposition::Element(name.clone()),
            _ => Disposition::Keep,
        };

        match disposition {
            Disposition::Keep => {}
            Disposition::Remove => dom.detach(id),
            Disposition::Element(name) => {
                if !policy::is_allowed_tag(&name) {
                    let text = dom.text_content_deep(id);
                    dom.replace_with_text(id, text);
                    continue;
                }
                clean_attributes(dom, id);
                if name == "a" {
                    apply_link_policy(dom, id);
                }
                clean_children(dom, id);
            }
        }
    }
}

/// Drop every attribute the policy rejects.
fn clean_attributes(dom: &mut Dom, id: NodeId) {
    if let Some(node) = dom.get_mut(id)
        && let NodeData::Element { attrs, .. } = &mut node.data
    {
        attrs.retain(|attr| {
            policy::is_allowed_attr(&attr.name)
                && (!policy::is_url_attr(&attr.name) || policy::is_safe_url(&attr.value))
        });
    }
}

/// Force the link hardening attributes on a retained `<a>`.
///
/// Target is set first so a fresh link serializes as
/// `target="_blank" rel="noopener noreferrer"`; an existing non-empty
/// target is left alone, an existing rel is always overwritten.
fn apply_link_policy(dom: &mut Dom, id: NodeId) {
    let target_missing = dom.get_attr(id, "target").is_none_or(str::is_empty);
    if target_missing {
        dom.set_attr(id, "target", "_blank");
    }
    dom.set_attr(id, "rel", "noopener noreferrer");
}
