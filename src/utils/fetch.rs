//! Network fetching utilities with timeout support.
//!
//! Thin wrappers over the browser Fetch API that return the response body as
//! text. Decoding is left to the caller.

use js_sys::{Array, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined when the timer fires
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// GET `url` and return the body text.
pub async fn get_text(url: &str) -> Result<String, FetchError> {
    fetch_url("GET", url, None).await
}

/// POST `body` as JSON to `url` and return the body text.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<String, FetchError> {
    let json =
        serde_json::to_string(body).map_err(|e| FetchError::BodyEncodingFailed(e.to_string()))?;
    fetch_url("POST", url, Some(&json)).await
}

/// Issue a request through the Fetch API, racing it against `FETCH_TIMEOUT_MS`.
async fn fetch_url(method: &str, url: &str, json_body: Option<&str>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(body) = json_body {
        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            let status = resp.status();
            let body = read_text(&resp).await;

            if !resp.ok() {
                // Error bodies may still explain the failure
                return match body {
                    Ok(body) => Err(FetchError::HttpStatus { status, body }),
                    Err(_) => Err(FetchError::HttpError(status)),
                };
            }

            body
        }
    }
}

async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
