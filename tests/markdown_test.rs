//! Renderer tests: the restricted markdown subset, line by line.
//!
//! These exercise `render_markdown` on its own, before sanitization; the
//! full pipeline is covered in `pipeline_test.rs`.

use borax::render_markdown;

// ============================================================================
// Block structure
// ============================================================================

#[test]
fn test_paragraphs() {
    assert_eq!(render_markdown("one\ntwo"), "<p>one</p><p>two</p>");
}

#[test]
fn test_blank_lines_emit_nothing() {
    assert_eq!(render_markdown("a\n\n\nb"), "<p>a</p><p>b</p>");
}

#[test]
fn test_headings_all_levels() {
    for level in 1..=6 {
        let input = format!("{} title", "#".repeat(level));
        assert_eq!(
            render_markdown(&input),
            format!("<h{level}>title</h{level}>")
        );
    }
}

#[test]
fn test_blockquote() {
    assert_eq!(
        render_markdown("> a quote"),
        "<blockquote>a quote</blockquote>"
    );
}

#[test]
fn test_blockquote_requires_space() {
    assert_eq!(render_markdown(">nospace"), "<p>&gt;nospace</p>");
}

// ============================================================================
// Lists and list context
// ============================================================================

#[test]
fn test_bullet_markers() {
    assert_eq!(
        render_markdown("- a\n* b\n+ c"),
        "<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn test_numbered_items() {
    assert_eq!(
        render_markdown("1. first\n2. second\n10. tenth"),
        "<ol><li>first</li><li>second</li><li>tenth</li></ol>"
    );
}

#[test]
fn test_list_closed_by_blank_line_then_paragraph() {
    assert_eq!(
        render_markdown("- a\n- b\n\nplain"),
        "<ul><li>a</li><li>b</li></ul><p>plain</p>"
    );
}

#[test]
fn test_list_closed_by_heading() {
    assert_eq!(
        render_markdown("- a\n# h"),
        "<ul><li>a</li></ul><h1>h</h1>"
    );
}

#[test]
fn test_alternating_list_types() {
    assert_eq!(
        render_markdown("- a\n1. b\n- c\n2. d"),
        "<ul><li>a</li></ul><ol><li>b</li></ol><ul><li>c</li></ul><ol><li>d</li></ol>"
    );
}

#[test]
fn test_numbered_item_with_empty_content() {
    assert_eq!(render_markdown("1. \n2. x"), "<ol><li></li><li>x</li></ol>");
}

#[test]
fn test_list_open_at_end_of_input_is_closed() {
    assert_eq!(render_markdown("text\n- tail"), "<p>text</p><ul><li>tail</li></ul>");
}

// ============================================================================
// Inline markup
// ============================================================================

#[test]
fn test_inline_combination() {
    assert_eq!(
        render_markdown("**b** _i_ `c`"),
        "<p><strong>b</strong> <em>i</em> <code>c</code></p>"
    );
}

#[test]
fn test_inline_link() {
    assert_eq!(
        render_markdown("see [docs](https://example.com/docs)"),
        r#"<p>see <a href="https://example.com/docs">docs</a></p>"#
    );
}

#[test]
fn test_inline_link_non_http_stays_text() {
    assert_eq!(
        render_markdown("[x](javascript:alert(1))"),
        "<p>[x](javascript:alert(1))</p>"
    );
}

#[test]
fn test_unbalanced_markers_stay_literal() {
    assert_eq!(render_markdown("a ** b"), "<p>a ** b</p>");
    assert_eq!(render_markdown("`unclosed"), "<p>`unclosed</p>");
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_html_in_markdown_is_escaped() {
    assert_eq!(
        render_markdown("- <script>x</script>"),
        "<ul><li>&lt;script&gt;x&lt;/script&gt;</li></ul>"
    );
}

#[test]
fn test_escaping_runs_before_inline_substitution() {
    // The produced tags are real; the user's angle brackets are not.
    assert_eq!(
        render_markdown("**<b>**"),
        "<p><strong>&lt;b&gt;</strong></p>"
    );
}

#[test]
fn test_quotes_escaped_in_content() {
    assert_eq!(
        render_markdown("say \"hi\" and 'bye'"),
        "<p>say &quot;hi&quot; and &#39;bye&#39;</p>"
    );
}
