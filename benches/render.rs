//! Benchmarks for the render-and-sanitize pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use borax::dom::SoupParser;
use borax::{decode_entities, render_markdown, sanitize, sanitize_with, to_safe_html};

/// A mixed markdown document of a few hundred lines.
fn sample_markdown() -> String {
    "# Section\n\nA paragraph with **bold**, _italic_, `code`, and a \
     [link](https://example.com/docs).\n\n- first item\n- second item\n\
     - third item\n\n1. one\n2. two\n\n> a quoted line\n\n"
        .repeat(64)
}

/// Tag soup with roughly half the content behind disallowed markup.
fn sample_html() -> String {
    "<div class=\"wrap\"><h2 id=\"s\">Section</h2><p style=\"color:red\">body \
     <strong>text</strong> &amp; more</p><script>track();</script>\
     <a href=\"https://example.com\" onclick=\"x()\">link</a>\
     <img src=\"/p.png\" onerror=\"y()\"><table><tr><td>cell</td></tr></table></div>"
        .repeat(64)
}

/// Paragraphs sprinkled with character references.
fn sample_entities() -> String {
    "fish &amp; chips &mdash; 2 &lt; 3, caf&eacute; &#x2713; &nbsp;done\n".repeat(256)
}

// ============================================================================
// Stage benchmarks
// ============================================================================

fn bench_render_markdown(c: &mut Criterion) {
    let input = sample_markdown();
    c.bench_function("render_markdown", |b| {
        b.iter(|| render_markdown(&input));
    });
}

fn bench_decode_entities(c: &mut Criterion) {
    let input = sample_entities();
    c.bench_function("decode_entities", |b| {
        b.iter(|| decode_entities(&input).into_owned());
    });
}

fn bench_sanitize(c: &mut Criterion) {
    let input = sample_html();
    c.bench_function("sanitize", |b| {
        b.iter(|| sanitize(&input));
    });
}

fn bench_sanitize_soup_backend(c: &mut Criterion) {
    let input = sample_html();
    c.bench_function("sanitize_soup_backend", |b| {
        b.iter(|| sanitize_with(&SoupParser, &input));
    });
}

// ============================================================================
// Pipeline benchmarks
// ============================================================================

fn bench_pipeline_markdown(c: &mut Criterion) {
    let input = sample_markdown();
    c.bench_function("to_safe_html_markdown", |b| {
        b.iter(|| to_safe_html(&input));
    });
}

fn bench_pipeline_html(c: &mut Criterion) {
    let input = sample_html();
    c.bench_function("to_safe_html_html", |b| {
        b.iter(|| to_safe_html(&input));
    });
}

criterion_group!(
    benches,
    // Stages
    bench_render_markdown,
    bench_decode_entities,
    bench_sanitize,
    bench_sanitize_soup_backend,
    // Pipeline
    bench_pipeline_markdown,
    bench_pipeline_html,
);
criterion_main!(benches);
