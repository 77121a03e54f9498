//! Configuration management for Toolbelt
//!
//! Loads configuration with priority:
//! 1. config.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults
//!
//! These are the global settings. Per-user overrides arrive at call time
//! through [`ToolContext::user_settings`](crate::ToolContext::user_settings).

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Toolbelt configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub seozoom: SeoZoomSettings,

    #[serde(default)]
    pub smartserp: SmartSerpSettings,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// SEOZoom API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoZoomSettings {
    /// API key (can reference env var with ${VAR_NAME})
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_seozoom_base_url")]
    pub base_url: String,

    /// Reference date sent to the history endpoints
    #[serde(default = "default_history_date")]
    pub history_date: String,
}

/// Google Custom Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartSerpSettings {
    #[serde(default)]
    pub google_api_key: String,

    #[serde(default)]
    pub custom_search_engine_id: String,

    /// Results per query (1-10)
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Interface and result language code
    #[serde(default = "default_language")]
    pub language: Option<String>,

    /// Date restriction applied when the prompt has none (d1, w1, m1, y1)
    pub date_restrict: Option<String>,

    #[serde(default = "default_search_base_url")]
    pub base_url: String,
}

/// Observability configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: Option<String>,
    pub log_filter: Option<String>,
    /// Emit one JSON object per log line instead of text
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for SeoZoomSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_seozoom_base_url(),
            history_date: default_history_date(),
        }
    }
}

impl Default for SmartSerpSettings {
    fn default() -> Self {
        Self {
            google_api_key: String::new(),
            custom_search_engine_id: String::new(),
            max_results: default_max_results(),
            language: default_language(),
            date_restrict: None,
            base_url: default_search_base_url(),
        }
    }
}

impl ToolsConfig {
    /// Load configuration with the following priority:
    /// 1. config.toml in current directory or a parent
    /// 2. Environment variables (fallback)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse, resolve and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: ToolsConfig = toml::from_str(contents)?;
        config.resolve_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Configuration built from environment variables alone
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.resolve_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Find config.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join("config.toml");
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!(
            "config.toml not found. Create one with: cp config.toml.example config.toml"
        ))
    }

    /// Resolve ${VAR_NAME} references, falling back to well-known variables
    fn resolve_env_vars(&mut self) {
        Self::resolve_secret(&mut self.seozoom.api_key, "SEOZOOM_API_KEY");
        Self::resolve_secret(&mut self.smartserp.google_api_key, "GOOGLE_API_KEY");
        Self::resolve_secret(
            &mut self.smartserp.custom_search_engine_id,
            "GOOGLE_CSE_ID",
        );

        if let Some(resolved) = Self::resolve_env_var(&self.seozoom.base_url) {
            self.seozoom.base_url = resolved;
        }
        if let Some(resolved) = Self::resolve_env_var(&self.smartserp.base_url) {
            self.smartserp.base_url = resolved;
        }
    }

    fn resolve_secret(value: &mut String, fallback_var: &str) {
        match Self::resolve_env_var(value) {
            Some(resolved) if !resolved.is_empty() => *value = resolved,
            _ => *value = env::var(fallback_var).unwrap_or_default(),
        }
    }

    /// Resolve a single ${VAR_NAME} reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        validate_max_results(self.smartserp.max_results)?;
        if let Some(language) = &self.smartserp.language {
            validate_language(language)?;
        }
        Ok(())
    }

    /// Create test-friendly defaults (no real keys)
    pub fn test_defaults() -> Self {
        Self {
            seozoom: SeoZoomSettings {
                api_key: "test-seozoom-key".to_string(),
                ..SeoZoomSettings::default()
            },
            smartserp: SmartSerpSettings {
                google_api_key: "test-google-key".to_string(),
                custom_search_engine_id: "test-cse-id".to_string(),
                ..SmartSerpSettings::default()
            },
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Results-per-query bound shared by global and per-user settings
pub fn validate_max_results(value: u32) -> crate::Result<()> {
    if (1..=10).contains(&value) {
        Ok(())
    } else {
        Err(crate::Error::config_error(format!(
            "max_results must be between 1 and 10, got {}",
            value
        )))
    }
}

/// Language codes are 2 to 5 characters (e.g. "en", "pt-BR")
pub fn validate_language(value: &str) -> crate::Result<()> {
    if (2..=5).contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(crate::Error::config_error(format!(
            "language must be 2 to 5 characters, got '{}'",
            value
        )))
    }
}

fn default_seozoom_base_url() -> String {
    "https://apiv2.seozoom.com/api/v2".to_string()
}

fn default_history_date() -> String {
    "2025-06-01".to_string()
}

fn default_search_base_url() -> String {
    "https://www.googleapis.com/customsearch/v1".to_string()
}

fn default_max_results() -> u32 {
    10
}

fn default_language() -> Option<String> {
    Some("en".to_string())
}
