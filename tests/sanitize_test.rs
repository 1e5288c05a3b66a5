//! Sanitizer tests: allow-list policy, URL schemes, link hardening.
//!
//! Each policy case runs against the default (html5ever) backend; a final
//! section checks the tokenizer fallback agrees on the same inputs.

use borax::dom::SoupParser;
use borax::{sanitize, sanitize_with};

// ============================================================================
// Tag allow-list
// ============================================================================

#[test]
fn test_dangerous_tags_stripped_content_kept() {
    assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
    assert_eq!(sanitize("<style>p{color:red}</style>"), "p{color:red}");
    assert_eq!(sanitize("<iframe src=\"https://x\">fb</iframe>"), "fb");
    assert_eq!(sanitize("<object>fallback</object>"), "fallback");
    assert_eq!(sanitize("<embed>"), "");
}

#[test]
fn test_uppercase_tags_are_matched() {
    assert_eq!(sanitize("<SCRIPT>alert(1)</SCRIPT>"), "alert(1)");
}

#[test]
fn test_unknown_tag_text_survives() {
    assert_eq!(sanitize("<widget>visible text</widget>"), "visible text");
}

#[test]
fn test_disallowed_wrapper_loses_allowed_children() {
    // Stripping flattens the whole subtree to text.
    assert_eq!(sanitize("<form><strong>x</strong></form>"), "x");
}

#[test]
fn test_allowed_structure_preserved() {
    let input = "<div><h2>t</h2><ul><li>a</li><li>b</li></ul><hr><pre>code</pre></div>";
    assert_eq!(sanitize(input), input);
}

#[test]
fn test_media_elements_preserved() {
    assert_eq!(
        sanitize(r#"<video controls="controls"><source src="/clip.mp4"></video>"#),
        r#"<video controls="controls"><source src="/clip.mp4"></video>"#
    );
}

// ============================================================================
// Attribute allow-list
// ============================================================================

#[test]
fn test_event_handlers_removed() {
    assert_eq!(
        sanitize(r#"<img src="/x.png" onerror="steal()" onload="y()">"#),
        r#"<img src="/x.png">"#
    );
}

#[test]
fn test_style_and_class_removed() {
    assert_eq!(
        sanitize(r#"<p style="color:red" class="big" id="p1" title="keep">x</p>"#),
        r#"<p title="keep">x</p>"#
    );
}

#[test]
fn test_attribute_names_case_insensitive() {
    assert_eq!(sanitize(r#"<p ONCLICK="x">y</p>"#), "<p>y</p>");
}

// ============================================================================
// URL scheme policy
// ============================================================================

#[test]
fn test_javascript_src_removed() {
    assert_eq!(sanitize(r#"<img src="javascript:alert(1)">"#), "<img>");
}

#[test]
fn test_data_href_removed() {
    assert_eq!(
        sanitize(r#"<a href="data:text/html;base64,x">y</a>"#),
        r#"<a target="_blank" rel="noopener noreferrer">y</a>"#
    );
}

#[test]
fn test_scheme_check_is_case_insensitive() {
    assert_eq!(sanitize(r#"<img src="JAVASCRIPT:alert(1)">"#), "<img>");
    assert_eq!(
        sanitize(r#"<img src="HTTPS://example.com/x.png">"#),
        r#"<img src="HTTPS://example.com/x.png">"#
    );
}

#[test]
fn test_allowed_url_shapes() {
    for url in ["http://e.com", "https://e.com", "mailto:a@b.c", "/p", "#frag"] {
        let input = format!(r#"<img src="{url}">"#);
        assert_eq!(sanitize(&input), input, "url: {url}");
    }
}

#[test]
fn test_padded_url_value_is_trimmed_for_the_check() {
    let out = sanitize(r#"<img src=" https://e.com/x ">"#);
    assert!(out.starts_with("<img src="), "src should survive: {out}");
}

// ============================================================================
// Link hardening
// ============================================================================

#[test]
fn test_links_get_target_and_rel() {
    assert_eq!(
        sanitize(r#"<a href="https://example.com">click</a>"#),
        r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">click</a>"#
    );
}

#[test]
fn test_existing_target_not_overwritten() {
    assert_eq!(
        sanitize(r#"<a href="/x" target="_self">y</a>"#),
        r#"<a href="/x" target="_self" rel="noopener noreferrer">y</a>"#
    );
}

#[test]
fn test_empty_target_treated_as_missing() {
    assert_eq!(
        sanitize(r#"<a href="/x" target="">y</a>"#),
        r#"<a href="/x" target="_blank" rel="noopener noreferrer">y</a>"#
    );
}

#[test]
fn test_existing_rel_always_overwritten() {
    let out = sanitize(r#"<a href="/x" rel="opener bookmark">y</a>"#);
    assert!(out.contains(r#"rel="noopener noreferrer""#), "got: {out}");
    assert!(!out.contains("opener bookmark"));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_sanitize_is_idempotent() {
    let inputs = [
        "<div><script>x</script><p onclick=a>b</p></div>",
        r#"<a href="https://e.com" rel="me">link</a>"#,
        "text with < stray brackets > and & ampersands",
        "<ul><li>a<li>b</ul>",
        "<widget><em>deep</em></widget>",
        "",
    ];
    for input in inputs {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "input: {input}");

        let once = sanitize_with(&SoupParser, input);
        assert_eq!(
            sanitize_with(&SoupParser, &once),
            once,
            "soup input: {input}"
        );
    }
}

// ============================================================================
// Tokenizer fallback parity
// ============================================================================

#[test]
fn test_backends_agree_on_policy_outcomes() {
    let cases = [
        "<script>alert(1)</script>",
        r#"<p onclick="x" title="t">hi</p>"#,
        r#"<a href="https://example.com">click</a>"#,
        r#"<a href="javascript:alert(1)">x</a>"#,
        r#"<img src="/ok.png" style="x">"#,
        "<ul><li>a</li><li>b</li></ul>",
        "<h3>heading</h3><blockquote>q</blockquote>",
        "plain text only",
    ];
    for case in cases {
        assert_eq!(
            sanitize(case),
            sanitize_with(&SoupParser, case),
            "input: {case}"
        );
    }
}
