//! Resolves stored image references to fetchable object-store URLs.

use crate::dom;
use thiserror::Error;

/// Bucket holding theme images.
pub const THEME_IMAGE_BUCKET: &str = "themeimage";

/// Public object endpoint used when `STORAGE_BASE_URL` is not set at
/// compile time (same-origin storage proxy).
const DEFAULT_STORAGE_BASE: &str = "/storage/v1/object/public";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(String),
}

/// Public URL of an object in `bucket` at `path`.
#[must_use]
pub fn public_object_url(bucket: &str, path: &str) -> String {
    public_object_url_with_base(
        option_env!("STORAGE_BASE_URL").unwrap_or(DEFAULT_STORAGE_BASE),
        bucket,
        path,
    )
}

fn public_object_url_with_base(base: &str, bucket: &str, path: &str) -> String {
    format!(
        "{base}/{bucket}/{path}",
        base = base.trim_end_matches('/'),
        bucket = bucket.trim_matches('/'),
        path = path.trim_start_matches('/'),
    )
}

/// Resolve a stored file to a displayable URL.
///
/// Probes the public object URL with a `HEAD` request; `Ok(None)` means the
/// object is not available (missing or denied) and the caller should render
/// without it.
///
/// # Errors
/// Returns an error when the probe itself cannot be dispatched, e.g. the
/// network is unreachable.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn storage_file_url(bucket: &str, path: &str) -> Result<Option<String>, StorageError> {
    let url = public_object_url(bucket, path);
    let request = dom::request_with_method(&url, "HEAD")
        .map_err(|err| StorageError::Request(dom::js_error_message(&err)))?;
    let response = dom::fetch_request(&request)
        .await
        .map_err(|err| StorageError::Request(dom::js_error_message(&err)))?;

    if response.ok() {
        Ok(Some(url))
    } else {
        Ok(None)
    }
}
