//! WASM bindings for in-browser rendering.
//!
//! This module exposes the pipeline to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Turn untrusted rich text (markdown or HTML) into safe HTML.
#[wasm_bindgen(js_name = toSafeHtml)]
pub fn to_safe_html(content: &str) -> String {
    crate::to_safe_html(content)
}

/// Render the restricted markdown subset to an (unsanitized) HTML fragment.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(text: &str) -> String {
    crate::render_markdown(text)
}

/// Sanitize an HTML string against the allow-lists.
#[wasm_bindgen(js_name = sanitizeHtml)]
pub fn sanitize_html(html: &str) -> String {
    crate::sanitize(html)
}
