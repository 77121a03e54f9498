use std::sync::Arc;
use toolbelt_core::{StatusSink, ToolContext};

/// Default implementation of ToolContext
#[derive(Clone)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
    user_settings: Option<serde_json::Value>,
    status_sink: Option<Arc<dyn StatusSink>>,
}

impl DefaultToolContext {
    pub fn new(function_call_id: String, invocation_id: String) -> Self {
        Self {
            function_call_id,
            invocation_id,
            user_settings: None,
            status_sink: None,
        }
    }

    /// Attach per-user settings (a JSON object of overrides)
    pub fn with_user_settings(mut self, settings: serde_json::Value) -> Self {
        self.user_settings = Some(settings);
        self
    }

    /// Attach a sink for progress notifications
    pub fn with_status_sink(mut self, sink: Arc<dyn StatusSink>) -> Self {
        self.status_sink = Some(sink);
        self
    }
}

impl std::fmt::Debug for DefaultToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultToolContext")
            .field("function_call_id", &self.function_call_id)
            .field("invocation_id", &self.invocation_id)
            .field("has_user_settings", &self.user_settings.is_some())
            .field("has_status_sink", &self.status_sink.is_some())
            .finish()
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn user_settings(&self) -> Option<&serde_json::Value> {
        self.user_settings.as_ref()
    }

    fn status_sink(&self) -> Option<Arc<dyn StatusSink>> {
        self.status_sink.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_context_creation() {
        let ctx = DefaultToolContext::new("call-123".to_string(), "inv-456".to_string());

        assert_eq!(ctx.function_call_id(), "call-123");
        assert_eq!(ctx.invocation_id(), "inv-456");
        assert!(ctx.user_settings().is_none());
        assert!(ctx.status_sink().is_none());
    }

    #[test]
    fn test_user_settings_attached() {
        let ctx = DefaultToolContext::new("call-1".to_string(), "inv-1".to_string())
            .with_user_settings(serde_json::json!({"language": "it"}));

        assert_eq!(ctx.user_settings().unwrap()["language"], "it");
    }
}
