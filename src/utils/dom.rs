//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Scroll the element with `id` into view, smoothly.
pub fn scroll_to_id(id: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history, fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
/// Useful for redirects that shouldn't appear in back button history.
/// Does not fire `hashchange`.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}
