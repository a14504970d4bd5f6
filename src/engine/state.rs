// engine/state.rs — Shared engine state for the demo.
//
// All mutable demo state lives behind one parking_lot mutex; the
// conversation lifecycle is tracked by an epoch counter plus an active flag.
// Each conversation gets a monotonically increasing epoch; a continuation
// whose epoch no longer matches is discarded on arrival, which is what makes
// reset safe against in-flight webhook calls.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::atoms::types::{ChatMessage, DemoContext, DemoMode, Lead, SystemStatus};
use crate::engine::events::{DemoEvent, EventSink};
use crate::engine::gateway::Gateway;
use crate::engine::generate;
use crate::engine::settings::Settings;

/// Everything the frontend renders: session identity, transcript, the
/// current scenario/lead, and the status panel.
#[derive(Debug, Default)]
pub struct DemoState {
    pub session_id: String,
    pub mode: DemoMode,
    pub messages: Vec<ChatMessage>,
    pub context: Option<DemoContext>,
    pub lead: Option<Lead>,
    pub initial_lead_sent: bool,
    pub status: SystemStatus,
}

pub struct EngineState {
    pub demo: Mutex<DemoState>,
    pub gateway: Gateway,
    pub settings: Mutex<Settings>,
    epoch: AtomicU64,
    active: AtomicBool,
}

impl EngineState {
    pub fn new(settings: Settings) -> Self {
        let demo = DemoState {
            session_id: generate::session_id(),
            ..DemoState::default()
        };
        EngineState {
            demo: Mutex::new(demo),
            gateway: Gateway::new(settings.endpoints.clone()),
            settings: Mutex::new(settings),
            epoch: AtomicU64::new(0),
            active: AtomicBool::new(false),
        }
    }

    // ── Conversation lifecycle ─────────────────────────────────────────────

    /// Start a new conversation epoch and mark it active.
    pub fn begin_conversation(&self) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.store(true, Ordering::SeqCst);
        epoch
    }

    /// Clear the active flag. The flag is only ever cleared here; a new
    /// trigger re-arms it via `begin_conversation`.
    pub fn end_conversation(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Bump the epoch without starting a conversation, so that every
    /// in-flight continuation becomes stale.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Whether a continuation started in `epoch` is still the live one.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.current_epoch() == epoch
    }

    pub fn conversation_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    // ── Transcript ─────────────────────────────────────────────────────────

    /// Append a message, stamp the status panel, and notify the frontend.
    pub fn push_message(&self, sink: &dyn EventSink, message: ChatMessage) {
        let status = {
            let mut demo = self.demo.lock();
            demo.status.last_message_time = Some(message.timestamp);
            demo.messages.push(message.clone());
            demo.status.clone()
        };
        sink.emit(&DemoEvent::Message { message });
        sink.emit(&DemoEvent::Status { status });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::NullSink;
    use crate::engine::gateway::EndpointConfig;
    use chrono::Utc;
    use std::collections::HashMap;

    fn bare_state() -> EngineState {
        EngineState::new(Settings {
            endpoints: EndpointConfig {
                triggers: HashMap::new(),
                customer_agent_url: String::new(),
                assistant_url: String::new(),
                lead_url: String::new(),
                default_url: None,
            },
            ..Settings::default()
        })
    }

    #[test]
    fn epochs_are_monotonic_and_invalidate_clears_the_flag() {
        let state = bare_state();
        let first = state.begin_conversation();
        assert!(state.conversation_active());
        assert!(state.is_current(first));

        state.invalidate();
        assert!(!state.conversation_active());
        assert!(!state.is_current(first));

        let second = state.begin_conversation();
        assert!(second > first);
    }

    #[test]
    fn push_message_stamps_last_message_time() {
        let state = bare_state();
        let message = ChatMessage {
            id: "m1".to_string(),
            role: crate::atoms::types::Role::Customer,
            text: "hi".to_string(),
            timestamp: Utc::now(),
            sender_name: None,
            background_activity: None,
        };
        state.push_message(&NullSink, message.clone());

        let demo = state.demo.lock();
        assert_eq!(demo.messages.len(), 1);
        assert_eq!(demo.status.last_message_time, Some(message.timestamp));
    }
}
