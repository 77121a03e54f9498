//! Error types for SEOZoom requests.

use thiserror::Error;

/// Result type for SEOZoom operations.
pub type Result<T> = std::result::Result<T, SeoZoomError>;

/// Errors that can occur while calling the SEOZoom API.
#[derive(Error, Debug)]
pub enum SeoZoomError {
    /// No API key in either the user or the global settings
    #[error("API key is required")]
    MissingApiKey,

    /// HTTP request error, with the request URL removed
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-success status from the API
    #[error("SEOZoom API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

// The request URL carries the API key as a query parameter.
impl From<reqwest::Error> for SeoZoomError {
    fn from(err: reqwest::Error) -> Self {
        SeoZoomError::Http(err.without_url())
    }
}

impl From<SeoZoomError> for toolbelt_core::Error {
    fn from(err: SeoZoomError) -> Self {
        toolbelt_core::Error::tool_failed("seozoom", err)
    }
}
