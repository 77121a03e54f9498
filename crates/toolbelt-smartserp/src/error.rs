//! Error types for Custom Search requests.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request error, with the request URL removed
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-success status from the API
    #[error("Custom Search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

// The request URL carries the API key as a query parameter.
impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Http(err.without_url())
    }
}

impl From<SearchError> for toolbelt_core::Error {
    fn from(err: SearchError) -> Self {
        toolbelt_core::Error::tool_failed("smart_serp", err)
    }
}
