//! Tool building blocks for Toolbelt
//!
//! This crate provides:
//! - Function tools built from async closures
//! - JSON schema helpers for tool parameters
//! - A default tool context for hosts and tests

pub mod context;
pub mod function_tool;
pub mod schema;

// Re-exports
pub use context::DefaultToolContext;
pub use function_tool::FunctionTool;
pub use schema::{ToolSchema, generate_schema};

// Re-export core types
pub use toolbelt_core::{Result, Tool, ToolContext, ToolResponse};
