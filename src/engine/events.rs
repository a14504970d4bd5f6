// Showroom Engine — Frontend Events
//
// Everything the orchestrator does is mirrored to the webview on the
// `demo-event` channel. Emission goes through the `EventSink` trait so the
// conversation logic stays testable without a Tauri AppHandle.

use log::warn;
use serde::Serialize;

use crate::atoms::types::{ChatMessage, DemoContext, DemoMode, Lead, SystemStatus};

pub const DEMO_EVENT: &str = "demo-event";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemoEvent {
    /// A message was appended to the transcript.
    Message { message: ChatMessage },
    /// The system-status panel was overwritten.
    Status { status: SystemStatus },
    /// A trigger established a new demo context.
    Context { context: DemoContext },
    /// A new inbound lead was generated.
    Lead { lead: Lead },
    /// The automated loop hit a stop condition.
    ConversationEnded { session_id: String },
    /// The demo was reset to a fresh session.
    Reset { session_id: String },
    /// The active demo tab changed.
    ModeChanged { mode: DemoMode },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: &DemoEvent);
}

impl EventSink for tauri::AppHandle {
    fn emit(&self, event: &DemoEvent) {
        if let Err(e) = tauri::Emitter::emit(self, DEMO_EVENT, event) {
            warn!("[events] failed to emit {}: {}", DEMO_EVENT, e);
        }
    }
}

/// Sink that drops everything. Used where no frontend is attached.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &DemoEvent) {}
}
