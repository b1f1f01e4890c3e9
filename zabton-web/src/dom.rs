use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestInit, Response, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Build a request for `url` with the given HTTP method and no body.
///
/// # Errors
/// Returns an error if the browser rejects the request construction.
pub fn request_with_method(url: &str, method: &str) -> Result<Request, JsValue> {
    let init = RequestInit::new();
    init.set_method(method);
    Request::new_with_str_and_init(url, &init)
}

/// Dispatch a prepared request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_request(request: &Request) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(window().fetch_with_request(request)).await?;
    resp_value.dyn_into::<Response>()
}
