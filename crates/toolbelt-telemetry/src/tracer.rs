//! Tracer setup and management

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use std::sync::OnceLock;
use toolbelt_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize telemetry with default settings.
///
/// The log filter comes from `RUST_LOG`.
///
/// # Example
///
/// ```rust,no_run
/// use toolbelt_telemetry::init_telemetry;
///
/// init_telemetry();
/// ```
pub fn init_telemetry() {
    init_telemetry_with(&ObservabilityConfig::default());
}

/// Initialize telemetry from the `[observability]` config section.
///
/// Installs the tracer provider as the OpenTelemetry global, then a
/// subscriber with the OpenTelemetry layer and a text or JSON fmt layer.
/// Only the first call has any effect.
pub fn init_telemetry_with(config: &ObservabilityConfig) {
    if INITIALIZED.set(()).is_err() {
        tracing::debug!("Telemetry already initialized");
        return;
    }

    let provider = TracerProvider::builder().build();
    let service_name = config
        .service_name
        .clone()
        .unwrap_or_else(|| crate::attributes::SYSTEM_NAME.to_string());
    let tracer = provider.tracer(service_name);
    opentelemetry::global::set_tracer_provider(provider);

    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };

    let (text_layer, json_layer) = if config.json_logs {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_line_number(true);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_line_number(true);
        (Some(layer), None)
    };

    let result = tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(text_layer)
        .with(json_layer)
        .with(filter)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Another subscriber is already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_telemetry_with(&ObservabilityConfig {
            service_name: Some("toolbelt-test".to_string()),
            log_filter: Some("warn".to_string()),
            json_logs: true,
        });
        init_telemetry();
        assert!(INITIALIZED.get().is_some());
    }
}
