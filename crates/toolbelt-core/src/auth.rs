//! API key authentication for upstream REST services.
//!
//! Both supported services take a static key as a URL query parameter
//! (`api_key=` for SEOZoom, `key=` for Custom Search).

/// An API key sent as a query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryApiKey {
    /// Name of the query parameter
    pub param: String,
    /// The API key value
    pub key: String,
}

impl QueryApiKey {
    /// Create query-parameter authentication.
    ///
    /// # Example
    ///
    /// ```
    /// use toolbelt_core::QueryApiKey;
    ///
    /// let auth = QueryApiKey::new("api_key", "my-secret-key");
    /// assert_eq!(auth.param, "api_key");
    /// ```
    pub fn new(param: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            key: key.into(),
        }
    }

    /// Apply the key to a reqwest RequestBuilder.
    pub fn apply_to_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.query(&[(self.param.as_str(), self.key.as_str())])
    }
}

impl std::fmt::Debug for QueryApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryApiKey")
            .field("param", &self.param)
            .field("key", &"<redacted>")
            .finish()
    }
}
