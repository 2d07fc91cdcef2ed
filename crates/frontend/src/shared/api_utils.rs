//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

/// Transport-level failure of an API call.
///
/// Cancellation is not a variant here: a superseded request is
/// reported by [`crate::shared::request_canceler::Cancelled`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// The admin pages are served by the same server that exposes `/api`,
/// so the base is the current window origin.
///
/// # Returns
/// - API base URL like "http://192.168.1.82:8000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/lookup/buyers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Aborts the browser fetch when dropped, unless disarmed.
///
/// The request canceler drops the future of a superseded request; this guard
/// turns that drop into a real `AbortController::abort()`.
struct AbortOnDrop(Option<AbortController>);

impl AbortOnDrop {
    fn new() -> Self {
        Self(AbortController::new().ok())
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.0.as_ref().map(|c| c.signal())
    }

    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            controller.abort();
        }
    }
}

/// GET `url` and decode the JSON body.
///
/// Non-2xx responses are failures. Dropping the returned future aborts the
/// underlying fetch.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let guard = AbortOnDrop::new();
    let signal = guard.signal();

    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let data = response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    guard.disarm();
    Ok(data)
}

/// POST a form as multipart `FormData`; only the status matters.
pub async fn post_form(url: &str, form: &web_sys::FormData) -> Result<(), FetchError> {
    let response = Request::post(url)
        .body(form.clone())
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(())
}
