use super::{Result, ToolContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Tool trait - abstraction for callable tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool
    fn name(&self) -> &str;

    /// Returns a description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's parameters
    fn schema(&self) -> serde_json::Value;

    /// Executes the tool with given parameters
    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: serde_json::Value,
    ) -> Result<ToolResponse>;
}

/// Tool execution response
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub result: serde_json::Value,
}

impl ToolResponse {
    /// Response carrying pre-formatted text for the host to show as-is.
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            result: serde_json::json!({ "content": text.into() }),
        }
    }

    /// Returns the text content, if this is a content response.
    pub fn text(&self) -> Option<&str> {
        self.result.get("content").and_then(|v| v.as_str())
    }
}
