//! The `smart_serp` tool.

use crate::client::{GoogleSearchClient, SearchRequest};
use crate::extract::extract;
use crate::filters::DateRestrict;
use crate::format;
use crate::i18n::Messages;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use toolbelt_core::config::validate_max_results;
use toolbelt_core::{
    Error, QueryApiKey, Result, SmartSerpSettings, StatusEmitter, Tool, ToolContext, ToolResponse,
};
use toolbelt_telemetry::{ToolSpanAttributes, safe_serialize, trace_tool_call};
use toolbelt_tool::generate_schema;
use tracing::{debug, info, warn};

/// Custom Search caps `num` at 10.
const MAX_NUM: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Parameters of the `smart_serp` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchArgs {
    /// The search query
    pub query: String,
    /// Number of results to return (1-10)
    #[serde(default)]
    pub num_results: Option<u32>,
    /// Free-text request to read filters from (file type, safe search,
    /// images, date range, site); defaults to the query
    #[serde(default)]
    pub prompt: Option<String>,
    /// Output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Per-user overrides read from the tool context. Empty values are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartSerpUserSettings {
    pub google_api_key: Option<String>,
    pub custom_search_engine_id: Option<String>,
    pub max_results: Option<u32>,
    pub language: Option<String>,
    pub date_restrict: Option<String>,
}

impl SmartSerpUserSettings {
    pub fn from_context(ctx: &dyn ToolContext) -> Self {
        let Some(value) = ctx.user_settings() else {
            return Self::default();
        };
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!("Ignoring malformed SmartSerp user settings: {}", e);
            Self::default()
        })
    }
}

/// Settings after applying user overrides.
struct Effective {
    api_key: String,
    engine_id: String,
    max_results: u32,
    language: Option<String>,
    date_restrict: Option<String>,
}

impl Effective {
    fn resolve(global: &SmartSerpSettings, user: &SmartSerpUserSettings) -> Self {
        let max_results = match user.max_results {
            Some(value) => match validate_max_results(value) {
                Ok(()) => value,
                Err(e) => {
                    warn!("Ignoring user max_results: {}", e);
                    global.max_results
                }
            },
            None => global.max_results,
        };

        Self {
            api_key: pick(&user.google_api_key, Some(&global.google_api_key)).unwrap_or_default(),
            engine_id: pick(
                &user.custom_search_engine_id,
                Some(&global.custom_search_engine_id),
            )
            .unwrap_or_default(),
            max_results,
            language: pick(&user.language, global.language.as_ref()),
            date_restrict: pick(&user.date_restrict, global.date_restrict.as_ref()),
        }
    }
}

/// First non-blank value.
fn pick(user: &Option<String>, global: Option<&String>) -> Option<String> {
    user.as_ref()
        .filter(|v| !v.trim().is_empty())
        .or(global.filter(|v| !v.trim().is_empty()))
        .cloned()
}

/// Google search driven by natural-language filters.
///
/// ```rust,no_run
/// use toolbelt_core::SmartSerpSettings;
/// use toolbelt_smartserp::SmartSerpTool;
///
/// let tool = SmartSerpTool::new(SmartSerpSettings::default()).unwrap();
/// ```
pub struct SmartSerpTool {
    name: String,
    description: String,
    settings: SmartSerpSettings,
    client: GoogleSearchClient,
}

impl SmartSerpTool {
    pub fn new(settings: SmartSerpSettings) -> Result<Self> {
        let client = GoogleSearchClient::new(settings.base_url.clone())?;
        Ok(Self {
            name: "smart_serp".to_string(),
            description: "Search Google and return the top results as Markdown or JSON. \
                Filters such as file type, safe search, image search, date range and \
                site restriction are read from the prompt in English, Italian, French \
                or Spanish (e.g. 'pdf reports last month site example.com')."
                .to_string(),
            settings,
            client,
        })
    }

    async fn run(&self, args: &SearchArgs, ctx: &dyn ToolContext) -> (String, &'static str) {
        let emitter = StatusEmitter::from_context(ctx);
        let user = SmartSerpUserSettings::from_context(ctx);
        let effective = Effective::resolve(&self.settings, &user);
        let messages = Messages::for_language(effective.language.as_deref().unwrap_or("en"));

        if args.query.trim().is_empty() {
            emitter.error_update(messages.error_empty_query).await;
            return (format!("Error: {}", messages.error_empty_query), "empty_query");
        }
        if effective.api_key.is_empty() {
            emitter.error_update(messages.error_api_key).await;
            return (format!("Error: {}", messages.error_api_key), "missing_api_key");
        }
        if effective.engine_id.is_empty() {
            emitter.error_update(messages.error_cse_id).await;
            return (format!("Error: {}", messages.error_cse_id), "missing_cse_id");
        }

        let num = args
            .num_results
            .unwrap_or(effective.max_results)
            .clamp(1, MAX_NUM);

        let base = args
            .prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(&args.query);
        let extraction = extract(base);
        let final_query = extraction.final_query(&args.query);

        let mut filters = extraction.filters.clone();
        if filters.date_restrict.is_none() {
            filters.date_restrict = effective
                .date_restrict
                .as_deref()
                .and_then(|code| match code.parse::<DateRestrict>() {
                    Ok(window) => Some(window),
                    Err(e) => {
                        warn!("Ignoring configured date restriction: {}", e);
                        None
                    }
                });
        }

        let request = SearchRequest {
            auth: QueryApiKey::new("key", effective.api_key.clone()),
            engine_id: effective.engine_id.clone(),
            query: final_query.clone(),
            num,
            language: effective.language.clone(),
            filters,
        };

        emitter.progress_update(messages.search_start).await;
        let response = match self.client.search(&request).await {
            Ok(response) => response,
            Err(e) => {
                let message = format!("Error during search: {}", e);
                warn!("{}", message);
                emitter.error_update(message.clone()).await;
                return (message, "error");
            }
        };

        if response.items.is_empty() {
            emitter.success_update(messages.search_no_items).await;
            return (messages.no_results.to_string(), "no_results");
        }

        let rendered = match args.output_format {
            OutputFormat::Json => format::json(
                &response.items,
                &final_query,
                effective.language.as_deref(),
                &extraction.filters,
            )
            .map_err(|e| e.to_string()),
            OutputFormat::Markdown => Ok(format::markdown(
                &response.items,
                &final_query,
                &args.query,
                messages,
            )),
        };

        match rendered {
            Ok(text) => {
                info!(results = response.items.len(), "Search completed");
                emitter.success_update(messages.search_success).await;
                (text, "results")
            }
            Err(e) => {
                let message = format!("Error during search: {}", e);
                emitter.error_update(message.clone()).await;
                (message, "error")
            }
        }
    }
}

#[async_trait]
impl Tool for SmartSerpTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        generate_schema::<SearchArgs>()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let args: SearchArgs = serde_json::from_value(params.clone())
            .map_err(|e| Error::invalid_parameter("query", e.to_string()))?;
        debug!(output_format = ?args.output_format, "Executing SmartSerp tool");

        let (text, outcome) = self.run(&args, ctx.as_ref()).await;
        let response = ToolResponse::content(text);

        trace_tool_call(ToolSpanAttributes {
            tool_name: self.name.clone(),
            tool_description: self.description.clone(),
            tool_call_id: ctx.function_call_id().to_string(),
            invocation_id: ctx.invocation_id().to_string(),
            args_json: safe_serialize(&params),
            response_json: safe_serialize(&response.result),
            outcome: outcome.to_string(),
        });

        Ok(response)
    }
}
