//! # Toolbelt SEOZoom
//!
//! SEO analytics from the SEOZoom v2 API, driven by Italian natural-language
//! requests.
//!
//! [`IntentRouter`] classifies a prompt against an ordered rule table and
//! produces an [`OperationCall`]; [`SeoZoomClient`] performs it. The two meet
//! in [`SeoZoomTool`], which hosts can register like any other tool.
//!
//! ```rust,no_run
//! use toolbelt_seozoom::{Database, IntentRouter, Operation};
//!
//! let call = IntentRouter::new()
//!     .resolve("Mostrami le metriche per il dominio example.com per il database uk")
//!     .unwrap();
//! assert_eq!(call.operation, Operation::DomainMetrics);
//! assert_eq!(call.database, Database::Uk);
//! ```

pub mod client;
pub mod database;
pub mod error;
pub mod intent;
pub mod operation;
pub mod tool;

pub use client::{SeoZoomClient, SeoZoomSession, SeoZoomUserSettings};
pub use database::Database;
pub use error::{Result, SeoZoomError};
pub use intent::{
    IntentRouter, IntentRule, NOT_RECOGNIZED, OperationHandler, RouteOutcome, default_rules,
};
pub use operation::{Operation, OperationCall, Subject};
pub use tool::{SeoZoomTool, operation_tools};
