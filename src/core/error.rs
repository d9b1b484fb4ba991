//! Error types for remote calls.
//!
//! - [`FetchError`] - Transport-level failures of a single HTTP request
//! - [`ApiError`] - What a call site reports to the user: network failure,
//!   application error carried in the body, or an unexpected payload shape

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    BodyEncodingFailed(String),
    /// Network request failed (connection refused, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Non-2xx response whose body was readable
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16, body: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of a remote operation, as surfaced in the inline message area.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a successful response.
    #[error("Could not reach the file service ({0})")]
    NetworkFailure(#[from] FetchError),
    /// The response body carried an `error` field.
    #[error("{0}")]
    ApplicationError(String),
    /// The response was not in the expected shape.
    #[error("Unexpected response from the file service: {0}")]
    DataShapeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::from(FetchError::HttpError(500));
        assert_eq!(
            err.to_string(),
            "Could not reach the file service (HTTP error: 500)"
        );
        assert_eq!(
            ApiError::ApplicationError("Path is not a directory".into()).to_string(),
            "Path is not a directory"
        );
    }
}
