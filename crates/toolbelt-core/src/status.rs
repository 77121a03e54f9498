//! Progress notifications sent to the host while a tool runs.
//!
//! Events are JSON-serializable in the shape hosts expect:
//! `{"type": "status", "data": {"status": ..., "description": ..., "done": ...}}`.

use crate::ToolContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lifecycle state reported in a status event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Success,
    Error,
}

/// A single progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub description: String,
    pub status: Status,
    pub done: bool,
}

impl StatusEvent {
    pub fn new(description: impl Into<String>, status: Status, done: bool) -> Self {
        Self {
            description: description.into(),
            status,
            done,
        }
    }

    /// Wire form of the event.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "status",
            "data": self,
        })
    }
}

/// Receiver of status events, implemented by the host.
#[async_trait]
pub trait StatusSink: Send + Sync {
    async fn emit(&self, event: StatusEvent);
}

/// Convenience wrapper that silently drops events when no sink is attached.
#[derive(Clone, Default)]
pub struct StatusEmitter {
    sink: Option<Arc<dyn StatusSink>>,
}

impl StatusEmitter {
    pub fn new(sink: Option<Arc<dyn StatusSink>>) -> Self {
        Self { sink }
    }

    /// Emitter bound to whatever sink the tool context carries.
    pub fn from_context(ctx: &dyn ToolContext) -> Self {
        Self::new(ctx.status_sink())
    }

    pub async fn emit(&self, description: impl Into<String>, status: Status, done: bool) {
        if let Some(sink) = &self.sink {
            sink.emit(StatusEvent::new(description, status, done)).await;
        }
    }

    pub async fn progress_update(&self, description: impl Into<String>) {
        self.emit(description, Status::InProgress, false).await;
    }

    pub async fn error_update(&self, description: impl Into<String>) {
        self.emit(description, Status::Error, true).await;
    }

    pub async fn success_update(&self, description: impl Into<String>) {
        self.emit(description, Status::Success, true).await;
    }
}

impl std::fmt::Debug for StatusEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusEmitter")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}
