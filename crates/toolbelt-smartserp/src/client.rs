//! Google Custom Search JSON API client.

use crate::error::{Result, SearchError};
use crate::filters::FilterSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use toolbelt_core::QueryApiKey;
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!("toolbelt-smartserp/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One `cse.list` call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub auth: QueryApiKey,
    /// Custom Search Engine id, sent as `cx`
    pub engine_id: String,
    pub query: String,
    pub num: u32,
    /// Result language, sent as `lr=lang_<code>`
    pub language: Option<String>,
    pub filters: FilterSet,
}

impl SearchRequest {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("cx", self.engine_id.clone()),
            ("q", self.query.clone()),
            ("num", self.num.to_string()),
        ];
        if let Some(language) = &self.language {
            params.push(("lr", format!("lang_{}", language.to_lowercase())));
        }
        params.extend(self.filters.to_query_params());
        params
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub display_link: String,
    pub formatted_url: String,
    pub pagemap: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct GoogleSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleSearchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    #[instrument(skip(self, request), fields(num = request.num))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        debug!(query = %request.query, filters = ?request.filters, "Custom Search request");

        let builder = self.http.get(&self.base_url).query(&request.query_params());
        let response = request.auth.apply_to_request(builder).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)?;
        debug!("Custom Search returned {} items", parsed.items.len());
        Ok(parsed)
    }
}
