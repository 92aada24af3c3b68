//! Defines the library's error type `DistrictApiError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition. Sources that do
//! not implement `Clone` are wrapped in `Arc` so that `DistrictApiError` itself
//! stays cloneable.

use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;

/// Everything that can go wrong talking to the Districts API.
#[derive(Error, Debug, Clone)]
pub enum DistrictApiError {
    /// Transport-level failure (DNS, connection, timeout) before any HTTP
    /// status was received from the service.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// The service answered with a non-success status. The response body is
    /// not inspected for detail; use [`is_authorization`](Self::is_authorization)
    /// and [`is_quota_exceeded`](Self::is_quota_exceeded) to classify.
    #[error("districts API returned HTTP {status}")]
    Http {
        /// The status code the service responded with.
        status: StatusCode,
    },

    /// The response body was not valid JSON, or was valid JSON that does not
    /// match the expected array of district records.
    #[error("malformed districts response: {0}")]
    Parse(Arc<serde_json::Error>),

    /// The API key supplied at construction was empty or all whitespace.
    #[error("API key must be a non-empty string")]
    EmptyApiKey,
}

impl DistrictApiError {
    /// Whether the service rejected the request for authorization reasons
    /// (HTTP 401 or 403). Receiving this probably means the API key is invalid.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::Http { status } if *status == StatusCode::UNAUTHORIZED
                || *status == StatusCode::FORBIDDEN
        )
    }

    /// Whether the service reported the request quota as exhausted (HTTP 429).
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::Http { status } if *status == StatusCode::TOO_MANY_REQUESTS)
    }
}

/// A specialized `Result` type using [`DistrictApiError`].
pub type Result<T> = std::result::Result<T, DistrictApiError>;

// --- From implementations ---
// These allow easy conversion from external error types into DistrictApiError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<reqwest::Error> for DistrictApiError {
    fn from(err: reqwest::Error) -> Self {
        DistrictApiError::Network(Arc::new(err))
    }
}

impl From<serde_json::Error> for DistrictApiError {
    fn from(err: serde_json::Error) -> Self {
        DistrictApiError::Parse(Arc::new(err))
    }
}
