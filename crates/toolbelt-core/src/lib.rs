//! Core traits and types for Toolbelt
//!
//! This crate provides the foundational abstractions shared by the SEO and
//! search tools: the `Tool` trait, tool contexts, status reporting,
//! configuration and error types.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod status;
pub mod traits;

// Re-exports
pub use auth::QueryApiKey;
pub use config::{SeoZoomSettings, SmartSerpSettings, ToolsConfig};
pub use context::ToolContext;
pub use error::{Error, Result};
pub use status::{Status, StatusEmitter, StatusEvent, StatusSink};
pub use traits::{Tool, ToolResponse};
