//! SmartSerp search example
//!
//! Shows which filters a prompt produces, then runs the search when Google
//! credentials are configured.
//!
//! Setup:
//! ```bash
//! export GOOGLE_API_KEY=...
//! export GOOGLE_CSE_ID=...
//! cargo run --example smartserp_search -- "report pdf ultimo mese sito example.com"
//! ```

use anyhow::Result;
use serde_json::json;
use std::env;
use std::sync::Arc;
use toolbelt_core::{Tool, ToolsConfig};
use toolbelt_smartserp::{SmartSerpTool, extract};
use toolbelt_telemetry::init_telemetry_with;
use toolbelt_tool::DefaultToolContext;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ToolsConfig::load().or_else(|_| ToolsConfig::from_env())?;
    config.validate()?;
    init_telemetry_with(&config.observability);

    let prompt = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let prompt = if prompt.is_empty() {
        "rust async tutorial pdf last month site example.com".to_string()
    } else {
        prompt
    };

    let extraction = extract(&prompt);
    println!("Prompt:   {}", prompt);
    println!("Filters:  {}", serde_json::to_string(&extraction.filters)?);
    println!("Query:    {}", extraction.final_query(&prompt));

    if config.smartserp.google_api_key.is_empty() || config.smartserp.custom_search_engine_id.is_empty() {
        tracing::info!("GOOGLE_API_KEY or GOOGLE_CSE_ID not set, skipping the live search");
        return Ok(());
    }

    let tool = SmartSerpTool::new(config.smartserp.clone())?;
    let ctx = Arc::new(DefaultToolContext::new(
        "demo-call".to_string(),
        "demo-invocation".to_string(),
    ));
    let response = tool
        .execute(ctx, json!({"query": prompt, "num_results": 5}))
        .await?;

    println!();
    println!("{}", response.text().unwrap_or_default());
    Ok(())
}
