// Showroom integration tests — conversation lifecycle end to end.
//
// The gateway is left unconfigured throughout, so every webhook send is the
// contractual no-op returning None. That makes the stop conditions, epoch
// guards, and reset semantics observable without any network.

use std::collections::HashMap;

use parking_lot::Mutex;
use showroom_lib::atoms::types::{
    ChatMessage, DemoMode, LeadSource, Role, TriggerType,
};
use showroom_lib::engine::events::{DemoEvent, EventSink};
use showroom_lib::engine::gateway::EndpointConfig;
use showroom_lib::engine::orchestrator;
use showroom_lib::engine::settings::Settings;
use showroom_lib::engine::state::EngineState;

// ── Harness ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingSink {
    kinds: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn kinds(&self) -> Vec<String> {
        self.kinds.lock().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &DemoEvent) {
        let kind = serde_json::to_value(event)
            .ok()
            .and_then(|v| v.get("kind").and_then(|k| k.as_str().map(str::to_string)))
            .unwrap_or_default();
        self.kinds.lock().push(kind);
    }
}

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

fn transcript_len(state: &EngineState) -> usize {
    state.demo.lock().messages.len()
}

// ── Post-purchase flow ─────────────────────────────────────────────────────

#[tokio::test]
async fn trigger_without_a_webhook_ends_the_conversation_quietly() {
    let state = bare_state();
    let sink = RecordingSink::default();

    orchestrator::run_trigger(&state, &sink, TriggerType::NewSale, true).await;

    assert_eq!(transcript_len(&state), 0);
    assert!(!state.conversation_active());
    let demo = state.demo.lock();
    assert!(demo.context.is_some(), "trigger must establish a context");
    assert_eq!(demo.status.rule_activated, "New Sale Follow-Up");
    assert!(demo.status.last_message_time.is_some());
    drop(demo);
    assert!(sink.kinds().contains(&"conversation_ended".to_string()));
}

#[tokio::test]
async fn auto_loop_seeded_with_a_stop_message_appends_nothing() {
    let state = bare_state();
    let sink = RecordingSink::default();
    let epoch = state.begin_conversation();

    orchestrator::run_auto_loop(
        &state,
        &sink,
        epoch,
        "STOP".to_string(),
        "Pat Smith".to_string(),
        "Dylan".to_string(),
        "sess-1".to_string(),
    )
    .await;

    assert_eq!(transcript_len(&state), 0);
    assert!(!state.conversation_active());
}

#[tokio::test]
async fn auto_loop_seeded_with_whitespace_also_stops() {
    let state = bare_state();
    let sink = RecordingSink::default();
    let epoch = state.begin_conversation();

    orchestrator::run_auto_loop(
        &state,
        &sink,
        epoch,
        "   ".to_string(),
        "Pat Smith".to_string(),
        "Dylan".to_string(),
        "sess-1".to_string(),
    )
    .await;

    assert_eq!(transcript_len(&state), 0);
    assert!(!state.conversation_active());
}

#[tokio::test]
async fn stale_epoch_continuations_are_discarded_on_arrival() {
    let state = bare_state();
    let sink = RecordingSink::default();
    let epoch = state.begin_conversation();

    // Reset while the (hypothetical) call is in flight: epoch moves on.
    orchestrator::reset_demo(&state, &sink);
    let events_after_reset = sink.kinds().len();

    orchestrator::run_auto_loop(
        &state,
        &sink,
        epoch,
        "Hello there!".to_string(),
        "Pat Smith".to_string(),
        "Dylan".to_string(),
        "sess-1".to_string(),
    )
    .await;

    // The stale continuation must not append, emit, or touch the flag.
    assert_eq!(transcript_len(&state), 0);
    assert_eq!(sink.kinds().len(), events_after_reset);
}

#[tokio::test]
async fn manual_send_appends_one_customer_message_and_never_loops() {
    let state = bare_state();
    let sink = RecordingSink::default();

    orchestrator::send_manual(&state, &sink, "Do you have it in blue?".to_string()).await;

    let demo = state.demo.lock();
    assert_eq!(demo.messages.len(), 1);
    let sent: &ChatMessage = &demo.messages[0];
    assert_eq!(sent.role, Role::Customer);
    assert_eq!(sent.text, "Do you have it in blue?");
    // No context established, so no sender label either
    assert_eq!(sent.sender_name, None);
    assert!(demo.status.last_message_time.is_some());
}

// ── Reset & mode switching ─────────────────────────────────────────────────

#[tokio::test]
async fn reset_clears_the_transcript_and_rolls_the_session_id() {
    let state = bare_state();
    let sink = RecordingSink::default();

    orchestrator::send_manual(&state, &sink, "hi".to_string()).await;
    let old_session = state.demo.lock().session_id.clone();
    assert_eq!(transcript_len(&state), 1);

    let new_session = orchestrator::reset_demo(&state, &sink);

    assert_ne!(new_session, old_session);
    // UUID v4 shape: 8-4-4-4-12
    assert_eq!(
        new_session.split('-').map(str::len).collect::<Vec<_>>(),
        vec![8, 4, 4, 4, 12]
    );
    let demo = state.demo.lock();
    assert_eq!(demo.session_id, new_session);
    assert!(demo.messages.is_empty());
    assert!(demo.context.is_none());
    assert!(demo.lead.is_none());
    assert_eq!(demo.status.rule_activated, "");
    drop(demo);
    assert!(!state.conversation_active());
    assert!(sink.kinds().contains(&"reset".to_string()));
}

#[tokio::test]
async fn mode_switch_clears_state_but_keeps_the_session() {
    let state = bare_state();
    let sink = RecordingSink::default();

    orchestrator::send_manual(&state, &sink, "hi".to_string()).await;
    let session = state.demo.lock().session_id.clone();

    orchestrator::set_demo_mode(&state, &sink, DemoMode::LeadFollowup);

    let demo = state.demo.lock();
    assert_eq!(demo.mode, DemoMode::LeadFollowup);
    assert_eq!(demo.session_id, session);
    assert!(demo.messages.is_empty());
    drop(demo);

    // Switching to the already-active mode is a no-op.
    let events_before = sink.kinds().len();
    orchestrator::set_demo_mode(&state, &sink, DemoMode::LeadFollowup);
    assert_eq!(sink.kinds().len(), events_before);
}

// ── Lead flow ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn lead_generation_without_a_webhook_stores_the_lead_only() {
    let state = bare_state();
    let sink = RecordingSink::default();

    let lead = orchestrator::generate_lead(&state, &sink, LeadSource::KbbIco).await;

    assert_eq!(lead.channel, "KBB ICO");
    assert!(lead.kbb_offer.is_some());
    let demo = state.demo.lock();
    assert!(demo.lead.is_some());
    // No opener arrived, so the phase-1 handshake is not marked complete
    assert!(!demo.initial_lead_sent);
    assert!(demo.messages.is_empty());
    // Lead generation never touches the trigger rule label
    assert_eq!(demo.status.rule_activated, "");
    drop(demo);
    assert!(sink.kinds().contains(&"lead".to_string()));
}

#[tokio::test]
async fn lead_reply_requires_an_active_lead() {
    let state = bare_state();
    let sink = RecordingSink::default();

    let result = orchestrator::send_lead_reply(&state, &sink, "Sounds good".to_string()).await;
    assert!(result.is_err());
    assert_eq!(transcript_len(&state), 0);
}

#[tokio::test]
async fn lead_reply_renders_the_customer_turn_with_the_lead_name() {
    let state = bare_state();
    let sink = RecordingSink::default();

    let lead = orchestrator::generate_lead(&state, &sink, LeadSource::Website).await;
    orchestrator::send_lead_reply(&state, &sink, "When can I come by?".to_string())
        .await
        .expect("lead is active");

    let demo = state.demo.lock();
    assert_eq!(demo.messages.len(), 1);
    assert_eq!(demo.messages[0].role, Role::Customer);
    assert_eq!(demo.messages[0].sender_name.as_deref(), Some(lead.customer_name.as_str()));
}
