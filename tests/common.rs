//! Common test utilities and helpers

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use toolbelt_core::{Status, StatusEvent, StatusSink, ToolContext};
use toolbelt_tool::DefaultToolContext;

/// Status sink that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<StatusEvent>>,
}

impl RecordingSink {
    pub async fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().await.clone()
    }

    pub async fn statuses(&self) -> Vec<Status> {
        self.events.lock().await.iter().map(|e| e.status).collect()
    }
}

#[async_trait]
impl StatusSink for RecordingSink {
    async fn emit(&self, event: StatusEvent) {
        self.events.lock().await.push(event);
    }
}

/// Tool context carrying `user_settings` and reporting to `sink`.
pub fn context_with(user_settings: Value, sink: Arc<RecordingSink>) -> Arc<dyn ToolContext> {
    Arc::new(
        DefaultToolContext::new("test-call".to_string(), "test-invocation".to_string())
            .with_user_settings(user_settings)
            .with_status_sink(sink),
    )
}

/// Install a quiet subscriber so `RUST_LOG=debug` shows tool logs in failures.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
