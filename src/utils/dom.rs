//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::models::Timestamp;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
///
/// Convenience wrapper around `focus_element("input")`.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

/// Read the browser clock.
///
/// The display form matches JavaScript's `Date.prototype.toString`.
pub fn now() -> Timestamp {
    let date = js_sys::Date::new_0();
    Timestamp::new(date.get_time(), String::from(date.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_now_is_after_epoch() {
        let ts = now();
        assert!(ts.millis > 0.0);
        assert!(!ts.display.is_empty());
    }
}
