//! SEOZoom prompt routing example
//!
//! Routes the reference Italian prompts through the intent router. Without an
//! API key only the routing decision is printed; with one each prompt is sent
//! to SEOZoom.
//!
//! Setup:
//! ```bash
//! cp config.toml.example config.toml   # or export SEOZOOM_API_KEY=...
//! cargo run --example seozoom_prompts
//! ```

use anyhow::Result;
use std::sync::Arc;
use toolbelt_core::ToolsConfig;
use toolbelt_seozoom::{IntentRouter, SeoZoomClient, SeoZoomUserSettings};
use toolbelt_telemetry::init_telemetry_with;

const PROMPTS: &[&str] = &[
    "Mostrami le metriche per la parola chiave seo",
    "Mostrami i risultati SERP per la parola chiave digital marketing per il database fr",
    "Mostrami lo storico SERP per la parola chiave digital marketing in uk",
    "Mostrami le parole chiave correlate per smartphone per il database de",
    "Mostrami le metriche per il dominio example.com",
    "Mostrami lo storico metriche per il dominio example.com per il database fr",
    "Mostrami l'autorità per il dominio example.com",
    "Mostrami le nicchie per il dominio example.com per il database uk",
    "Mostrami le migliori pagine per il dominio example.com in de",
    "Mostrami le parole chiave per il dominio example.com per il database es",
    "Mostrami i competitor per il dominio example.com in fr",
    "Mostrami la Page Zoom Authority per l'URL https://example.com/ per il database uk",
    "Mostrami le metriche per l'URL https://example.com/page/",
    "Mostrami le parole chiave per l'URL https://example.com/page/ per il database es",
    "Mostrami l'intent gap per l'URL https://example.com/article/ in fr",
    "Mostrami la lista dei progetti",
    "Mostrami la panoramica del progetto <NOME PROGETTO>",
    "Mostrami le parole chiave monitorate per il progetto <NOME PROGETTO> per il database fr",
    "Mostrami le migliori pagine per il progetto <NOME PROGETTO> in uk",
    "Mostrami le pagine con più parole chiave per il progetto <NOME PROGETTO> per il database de",
    "Mostrami le pagine con potenziale per il progetto <NOME PROGETTO>",
    "Mostrami le pagine vincenti per il progetto <NOME PROGETTO> per il database it",
    "Mostrami le pagine perdenti per il progetto <NOME PROGETTO> in fr",
];

#[tokio::main]
async fn main() -> Result<()> {
    let config = ToolsConfig::load().or_else(|_| ToolsConfig::from_env())?;
    init_telemetry_with(&config.observability);

    let router = IntentRouter::new();
    let live = !config.seozoom.api_key.is_empty();
    let client = Arc::new(SeoZoomClient::new(config.seozoom.clone())?);
    let session = client.session(&SeoZoomUserSettings::default(), Default::default());

    if !live {
        tracing::info!("SEOZOOM_API_KEY not set, printing routing decisions only");
    }

    for prompt in PROMPTS {
        println!("> {}", prompt);

        if !live {
            match router.resolve(prompt) {
                Some(call) => println!(
                    "  {} db={} subject={}",
                    call.operation,
                    call.database,
                    call.subject.as_deref().unwrap_or("-")
                ),
                None => println!("  {}", toolbelt_seozoom::NOT_RECOGNIZED),
            }
            continue;
        }

        let outcome = router.route(prompt, &session).await;
        println!("  {}", outcome.into_text());
    }

    Ok(())
}
