//! # Toolbelt SmartSerp
//!
//! Google Custom Search with filters read from natural language.
//!
//! [`extract`] turns a prompt such as "report pdf ultimo mese sito example.com"
//! into a typed [`FilterSet`] plus the remaining query text. [`SmartSerpTool`]
//! sends the result to the Custom Search JSON API and renders the items as
//! Markdown or JSON.
//!
//! ```rust
//! use toolbelt_smartserp::{DateRestrict, FileType, extract};
//!
//! let extraction = extract("report pdf ultimo mese");
//! assert_eq!(extraction.filters.file_type, Some(FileType::Pdf));
//! assert_eq!(extraction.filters.date_restrict, Some(DateRestrict::Months(1)));
//! assert_eq!(extraction.residual, "report filetype:pdf");
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod filters;
pub mod format;
pub mod i18n;
pub mod tool;

pub use client::{GoogleSearchClient, SearchItem, SearchRequest, SearchResponse};
pub use error::{Result, SearchError};
pub use extract::{Extraction, extract};
pub use filters::{DateRestrict, FileType, FilterSet, SafeSearch, SearchType, SiteFilter};
pub use i18n::Messages;
pub use tool::{OutputFormat, SearchArgs, SmartSerpTool, SmartSerpUserSettings};
