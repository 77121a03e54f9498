//! Host-facing tools built on [`SeoZoomClient`].

use crate::client::{SeoZoomClient, SeoZoomUserSettings};
use crate::database::Database;
use crate::intent::IntentRouter;
use crate::operation::{Operation, OperationCall};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use toolbelt_core::{Error, Result, StatusEmitter, Tool, ToolContext, ToolResponse};
use toolbelt_telemetry::{ToolSpanAttributes, safe_serialize, trace_tool_call};
use toolbelt_tool::{FunctionTool, ToolSchema};
use tracing::{debug, info};

/// Routes an Italian natural-language request to one SEOZoom operation.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use toolbelt_core::SeoZoomSettings;
/// use toolbelt_seozoom::{SeoZoomClient, SeoZoomTool};
///
/// let client = Arc::new(SeoZoomClient::new(SeoZoomSettings::default()).unwrap());
/// let tool = SeoZoomTool::new(client);
/// ```
pub struct SeoZoomTool {
    name: String,
    description: String,
    client: Arc<SeoZoomClient>,
    router: IntentRouter,
}

impl SeoZoomTool {
    pub fn new(client: Arc<SeoZoomClient>) -> Self {
        Self {
            name: "seozoom".to_string(),
            description: "SEO analytics from SEOZoom. Pass an Italian request such as \
                'Mostrami le metriche per il dominio example.com per il database uk'; \
                keyword, domain, URL and project reports are supported for the it, uk, \
                es, fr and de databases."
                .to_string(),
            client,
            router: IntentRouter::new(),
        }
    }

    /// Replace the routing table.
    pub fn with_router(mut self, router: IntentRouter) -> Self {
        self.router = router;
        self
    }
}

#[async_trait]
impl Tool for SeoZoomTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        ToolSchema::new()
            .property(
                "prompt",
                "string",
                "The request in Italian, optionally ending with 'per il database <db>' or 'in <db>'",
            )
            .required("prompt")
            .build()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let prompt = params
            .get("prompt")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::invalid_parameter("prompt", "must be a string"))?;

        debug!("Executing SEOZoom tool");

        let user = SeoZoomUserSettings::from_context(ctx.as_ref());
        let session = self
            .client
            .session(&user, StatusEmitter::from_context(ctx.as_ref()));

        let outcome = self.router.route(prompt, &session).await;
        let call = outcome.call().cloned();
        let outcome_label = call
            .as_ref()
            .map(|c| c.operation.name().to_string())
            .unwrap_or_else(|| "not_recognized".to_string());
        info!(outcome = %outcome_label, "SEOZoom prompt routed");

        let result = json!({
            "content": outcome.into_text(),
            "operation": call.as_ref().map(|c| c.operation),
            "database": call.as_ref().map(|c| c.database),
        });

        trace_tool_call(ToolSpanAttributes {
            tool_name: self.name.clone(),
            tool_description: self.description.clone(),
            tool_call_id: ctx.function_call_id().to_string(),
            invocation_id: ctx.invocation_id().to_string(),
            args_json: safe_serialize(&params),
            response_json: safe_serialize(&result),
            outcome: outcome_label,
        });

        Ok(ToolResponse { result })
    }
}

/// One [`FunctionTool`] per operation, named `get_<operation>`.
///
/// These skip intent routing: the subject and database arrive as typed
/// parameters.
pub fn operation_tools(client: Arc<SeoZoomClient>) -> Vec<FunctionTool> {
    Operation::ALL
        .into_iter()
        .map(|operation| operation_tool(operation, client.clone()))
        .collect()
}

fn operation_tool(operation: Operation, client: Arc<SeoZoomClient>) -> FunctionTool {
    let mut schema = ToolSchema::new();
    if let Some(subject) = operation.subject() {
        schema = schema
            .property("subject", "string", subject.describe())
            .required("subject");
    }
    schema = schema.enum_property(
        "db",
        &Database::ALL.map(|db| db.code()),
        "Country database (defaults to it)",
    );

    FunctionTool::new(
        operation.tool_name(),
        operation.description(),
        move |ctx: Arc<dyn ToolContext>, params: Value| {
            let client = client.clone();
            async move {
                let subject = params
                    .get("subject")
                    .and_then(|v| v.as_str())
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
                if operation.subject().is_some() && subject.is_none() {
                    return Err(Error::invalid_parameter("subject", "is required"));
                }

                let database = Database::resolve(params.get("db").and_then(|v| v.as_str()));
                let call = OperationCall::new(operation, subject, database);

                let user = SeoZoomUserSettings::from_context(ctx.as_ref());
                let emitter = StatusEmitter::from_context(ctx.as_ref());
                let output = client
                    .execute(&call, user.api_key.as_deref(), &emitter)
                    .await;

                Ok(ToolResponse::content(output))
            }
        },
    )
    .with_schema(schema.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::NOT_RECOGNIZED;
    use toolbelt_core::SeoZoomSettings;
    use toolbelt_tool::DefaultToolContext;

    fn offline_client() -> Arc<SeoZoomClient> {
        Arc::new(
            SeoZoomClient::new(SeoZoomSettings {
                api_key: String::new(),
                base_url: "http://127.0.0.1:9".to_string(),
                ..SeoZoomSettings::default()
            })
            .unwrap(),
        )
    }

    fn ctx() -> Arc<dyn ToolContext> {
        Arc::new(DefaultToolContext::new(
            "call-1".to_string(),
            "inv-1".to_string(),
        ))
    }

    #[test]
    fn test_tool_schema() {
        let tool = SeoZoomTool::new(offline_client());
        assert_eq!(tool.name(), "seozoom");
        let schema = tool.schema();
        assert!(schema["properties"]["prompt"].is_object());
        assert!(schema["required"].as_array().unwrap().contains(&json!("prompt")));
    }

    #[tokio::test]
    async fn test_unrecognized_prompt_returns_sentinel() {
        let tool = SeoZoomTool::new(offline_client());
        let response = tool
            .execute(ctx(), json!({"prompt": "tell me a joke"}))
            .await
            .unwrap();

        assert_eq!(response.text(), Some(NOT_RECOGNIZED));
        assert!(response.result["operation"].is_null());
    }

    #[tokio::test]
    async fn test_recognized_prompt_without_key_reports_error_payload() {
        let tool = SeoZoomTool::new(offline_client());
        let response = tool
            .execute(
                ctx(),
                json!({"prompt": "Mostrami le nicchie per il dominio example.com in uk"}),
            )
            .await
            .unwrap();

        assert_eq!(response.text(), Some(r#"{"error":"API key is required"}"#));
        assert_eq!(response.result["operation"], "domain_niches");
        assert_eq!(response.result["database"], "uk");
    }

    #[tokio::test]
    async fn test_missing_prompt_is_invalid_parameter() {
        let tool = SeoZoomTool::new(offline_client());
        let err = tool.execute(ctx(), json!({})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn test_operation_tools_cover_every_operation() {
        let tools = operation_tools(offline_client());
        assert_eq!(tools.len(), Operation::ALL.len());

        let projects = tools.iter().find(|t| t.name() == "get_projects_list").unwrap();
        let schema = projects.schema();
        assert!(schema["properties"].get("subject").is_none());
        assert_eq!(schema["properties"]["db"]["enum"].as_array().unwrap().len(), 5);

        let domain = tools.iter().find(|t| t.name() == "get_domain_metrics").unwrap();
        assert!(domain.schema()["required"].as_array().unwrap().contains(&json!("subject")));
    }

    #[tokio::test]
    async fn test_operation_tool_requires_subject() {
        let tools = operation_tools(offline_client());
        let tool = tools.iter().find(|t| t.name() == "get_keyword_metrics").unwrap();

        let err = tool.execute(ctx(), json!({"db": "fr"})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }
}
