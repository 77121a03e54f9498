//! HTTP client for the SEOZoom v2 REST API.

use crate::error::{Result, SeoZoomError};
use crate::intent::OperationHandler;
use crate::operation::OperationCall;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use toolbelt_core::{QueryApiKey, SeoZoomSettings, StatusEmitter, ToolContext};
use tracing::{debug, error, instrument, warn};

const USER_AGENT: &str = concat!("toolbelt-seozoom/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-user overrides read from the tool context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoZoomUserSettings {
    #[serde(default, alias = "SEOZOOM_API_KEY")]
    pub api_key: Option<String>,
}

impl SeoZoomUserSettings {
    pub fn from_context(ctx: &dyn ToolContext) -> Self {
        let Some(value) = ctx.user_settings() else {
            return Self::default();
        };
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("Ignoring malformed SEOZoom user settings: {}", e);
            Self::default()
        })
    }
}

/// Client for SEOZoom analytics requests.
#[derive(Debug, Clone)]
pub struct SeoZoomClient {
    http: reqwest::Client,
    settings: SeoZoomSettings,
}

impl SeoZoomClient {
    pub fn new(settings: SeoZoomSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &SeoZoomSettings {
        &self.settings
    }

    /// Issues `GET {base_url}/{endpoint}/` with the key, action and params.
    #[instrument(skip_all, fields(endpoint = %endpoint, action = %action))]
    pub async fn request(
        &self,
        api_key: &str,
        endpoint: &str,
        action: &str,
        params: &[(String, String)],
    ) -> Result<Value> {
        let url = format!("{}/{}/", self.settings.base_url.trim_end_matches('/'), endpoint);
        debug!("Request URL: GET {}", url);

        let mut builder = self.http.get(&url).query(&[("action", action)]);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        builder = QueryApiKey::new("api_key", api_key).apply_to_request(builder);

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SeoZoomError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Runs `call` and renders the outcome as a JSON string.
    ///
    /// Failures never escape: they are reported through `emitter` and
    /// returned as `{"error": ...}`.
    pub async fn execute(
        &self,
        call: &OperationCall,
        api_key: Option<&str>,
        emitter: &StatusEmitter,
    ) -> String {
        let action = call.operation.action();
        emitter
            .progress_update(format!("Making request to SEOZoom API: {}", action))
            .await;

        let result = match self.resolve_api_key(api_key) {
            Some(key) => {
                let params = call.query_params(&self.settings.history_date);
                self.request(key, call.operation.endpoint(), action, &params)
                    .await
            }
            None => Err(SeoZoomError::MissingApiKey),
        };

        match result {
            Ok(data) => {
                emitter
                    .success_update(format!("Successfully fetched data for action: {}", action))
                    .await;
                data.to_string()
            }
            Err(SeoZoomError::MissingApiKey) => {
                emitter.error_update("API key is required").await;
                json!({ "error": "API key is required" }).to_string()
            }
            Err(e) => {
                error!(operation = %call.operation, "SEOZoom request failed: {}", e);
                emitter
                    .error_update(format!("Error fetching data: {}", e))
                    .await;
                json!({ "error": e.to_string() }).to_string()
            }
        }
    }

    /// Handler bound to one caller's key and status sink.
    pub fn session<'a>(
        &'a self,
        user: &SeoZoomUserSettings,
        emitter: StatusEmitter,
    ) -> SeoZoomSession<'a> {
        SeoZoomSession {
            client: self,
            api_key: user.api_key.clone().filter(|key| !key.is_empty()),
            emitter,
        }
    }

    fn resolve_api_key<'a>(&'a self, user_key: Option<&'a str>) -> Option<&'a str> {
        user_key
            .filter(|key| !key.is_empty())
            .or_else(|| Some(self.settings.api_key.as_str()).filter(|key| !key.is_empty()))
    }
}

/// [`OperationHandler`] that performs calls with a fixed key and emitter.
#[derive(Debug)]
pub struct SeoZoomSession<'a> {
    client: &'a SeoZoomClient,
    api_key: Option<String>,
    emitter: StatusEmitter,
}

#[async_trait]
impl OperationHandler for SeoZoomSession<'_> {
    async fn handle(&self, call: &OperationCall) -> String {
        self.client
            .execute(call, self.api_key.as_deref(), &self.emitter)
            .await
    }
}
