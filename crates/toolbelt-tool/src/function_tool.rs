//! [`Tool`] backed by an async closure.

use crate::schema::ToolSchema;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use toolbelt_core::{Result, Tool, ToolContext, ToolResponse};

type HandlerFuture = Pin<Box<dyn Future<Output = Result<ToolResponse>> + Send>>;

/// Shared handler invoked for every call of a [`FunctionTool`].
pub type ToolHandler = Arc<dyn Fn(Arc<dyn ToolContext>, Value) -> HandlerFuture + Send + Sync>;

/// A named tool whose behavior is a closure over the call context and
/// parameters. Clones share the handler.
#[derive(Clone)]
pub struct FunctionTool {
    name: String,
    description: String,
    schema: Value,
    handler: ToolHandler,
}

impl FunctionTool {
    /// Tool with an empty object schema; see [`FunctionTool::with_schema`].
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Arc<dyn ToolContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolResponse>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            schema: ToolSchema::new().build(),
            handler: Arc::new(move |ctx: Arc<dyn ToolContext>, params: Value| -> HandlerFuture {
                Box::pin(handler(ctx, params))
            }),
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        self.schema.clone()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        (self.handler)(ctx, params).await
    }
}
