//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Everything returns `Option`/no-ops outside a browser so the
//! rest of the code never unwraps web-sys calls.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll position, or 0 outside a browser.
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Scroll the viewport back to the top (used on route changes).
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
    {
        document.set_title(title);
    }
}
