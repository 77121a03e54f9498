//! # Toolbelt Telemetry
//!
//! OpenTelemetry integration for tool executions.
//!
//! Every tool run is recorded as one `execute_tool` span whose attributes follow
//! the OpenTelemetry generative-AI conventions for tools, plus a few
//! toolbelt-specific attributes for routed intents and extracted filters.

mod spans;
mod tracer;

pub use spans::{ToolSpanAttributes, safe_serialize, trace_tool_call};
pub use tracer::{init_telemetry, init_telemetry_with};

/// OpenTelemetry span attribute constants for tool observability.
pub mod attributes {
    // Generic AI attributes
    pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";
    pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

    // Tool-specific attributes
    pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";
    pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";
    pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

    // Toolbelt attributes
    pub const TOOLBELT_INVOCATION_ID: &str = "toolbelt.invocation_id";
    pub const TOOLBELT_TOOL_CALL_ARGS: &str = "toolbelt.tool_call_args";
    pub const TOOLBELT_TOOL_RESPONSE: &str = "toolbelt.tool_response";
    pub const TOOLBELT_OUTCOME: &str = "toolbelt.outcome";

    // System name constant
    pub const SYSTEM_NAME: &str = "toolbelt";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_constants() {
        assert_eq!(attributes::GEN_AI_OPERATION_NAME, "gen_ai.operation.name");
        assert_eq!(attributes::GEN_AI_TOOL_NAME, "gen_ai.tool.name");
        assert_eq!(attributes::SYSTEM_NAME, "toolbelt");
    }
}
