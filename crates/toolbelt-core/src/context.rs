use crate::status::StatusSink;
use std::sync::Arc;

/// Tool context provided during tool execution
pub trait ToolContext: Send + Sync {
    fn function_call_id(&self) -> &str;
    fn invocation_id(&self) -> &str;

    /// Per-user settings supplied by the host, as a JSON object.
    ///
    /// Tools deserialize the keys they understand and let non-empty values
    /// take precedence over their global configuration.
    fn user_settings(&self) -> Option<&serde_json::Value> {
        None
    }

    /// Sink for progress notifications, if the host wants them.
    fn status_sink(&self) -> Option<Arc<dyn StatusSink>> {
        None
    }
}
