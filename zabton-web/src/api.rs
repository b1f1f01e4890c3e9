//! Client for the server-side rank computation endpoint.

use crate::dom;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Headers, Request, RequestInit};

/// Endpoint that computes the rank ("place") for the caller's answers to a
/// theme. The response body carries nothing this screen consumes; the
/// updated answer arrives through the caller's own refetch.
pub const COLLECT_RESULT_ENDPOINT: &str = "/api/collectResult";

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// JSON body of a collection request: the bare theme identifier.
#[must_use]
pub fn collect_payload(theme_id: i64) -> String {
    serde_json::json!(theme_id).to_string()
}

/// Ask the server to compute the rank for the caller's answer to `theme_id`.
///
/// # Errors
/// `CollectError::Request` when the request cannot be built or dispatched,
/// `CollectError::Status` for any response other than HTTP 200.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn collect_result(theme_id: i64) -> Result<(), CollectError> {
    let request = collect_request(theme_id).map_err(request_error)?;
    let response = dom::fetch_request(&request).await.map_err(request_error)?;

    if response.status() == 200 {
        Ok(())
    } else {
        Err(CollectError::Status(response.status()))
    }
}

fn collect_request(theme_id: i64) -> Result<Request, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&collect_payload(theme_id)));
    Request::new_with_str_and_init(COLLECT_RESULT_ENDPOINT, &init)
}

fn request_error(value: JsValue) -> CollectError {
    CollectError::Request(dom::js_error_message(&value))
}
