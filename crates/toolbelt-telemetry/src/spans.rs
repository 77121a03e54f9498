//! Span creation helpers for tool executions

use crate::attributes::*;

/// Attributes for tracing a tool call
#[derive(Debug, Clone)]
pub struct ToolSpanAttributes {
    pub tool_name: String,
    pub tool_description: String,
    pub tool_call_id: String,
    pub invocation_id: String,
    pub args_json: String,
    pub response_json: String,
    /// Short result label, e.g. the routed operation or "not_recognized"
    pub outcome: String,
}

/// Create and record an OpenTelemetry span for a tool execution.
///
/// Records the tool name, description, call ID, arguments, response and a
/// short outcome label. Arguments must already be free of credentials.
pub fn trace_tool_call(attrs: ToolSpanAttributes) {
    let span = tracing::info_span!(
        "execute_tool",
        { GEN_AI_SYSTEM } = SYSTEM_NAME,
        { GEN_AI_OPERATION_NAME } = "execute_tool",
        { GEN_AI_TOOL_NAME } = %attrs.tool_name,
        { GEN_AI_TOOL_DESCRIPTION } = %attrs.tool_description,
        { GEN_AI_TOOL_CALL_ID } = %attrs.tool_call_id,
        { TOOLBELT_INVOCATION_ID } = %attrs.invocation_id,
        { TOOLBELT_TOOL_CALL_ARGS } = %attrs.args_json,
        { TOOLBELT_TOOL_RESPONSE } = %attrs.response_json,
        { TOOLBELT_OUTCOME } = %attrs.outcome,
    );

    // Enter and immediately exit the span (it's recorded)
    let _guard = span.enter();
}

/// Helper to safely serialize to JSON string
pub fn safe_serialize<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<not serializable>".to_string())
}
