// Showroom Engine — Conversation Orchestrator
//
// The one piece of real control flow in the app: the trigger → webhook →
// normalize → render pipeline and the automated customer↔assistant loop.
//
// The loop is written as an explicit `loop` guarded by the conversation
// epoch, not as recursive self-invocation: after every await the epoch is
// re-checked and a stale continuation returns without touching state, so a
// reset mid-flight can never append to the fresh transcript. Stop handling:
// a null reply, the `"STOP"` sentinel, an empty string, or a structured
// `role: "stop"` all terminate the loop and clear the active flag.

use chrono::Utc;
use log::info;

use crate::atoms::constants::STOP_SENTINEL;
use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::types::{ChatMessage, DemoMode, Lead, LeadSource, Role, TriggerType};
use crate::engine::events::{DemoEvent, EventSink};
use crate::engine::state::EngineState;
use crate::engine::{activity, generate, leads, normalizer, payload};

// ── Post-purchase flow ─────────────────────────────────────────────────────

/// Fire a trigger: fabricate a fresh context, mark the conversation active,
/// send the trigger webhook, render the assistant's opener, and (unless
/// suppressed) hand it to the automated loop as the seed.
pub async fn run_trigger(
    state: &EngineState,
    sink: &dyn EventSink,
    trigger: TriggerType,
    auto_loop: bool,
) {
    let context = {
        let mut rng = rand::thread_rng();
        generate::random_context(&mut rng, trigger)
    };

    let epoch = state.begin_conversation();
    let session_id = {
        let mut demo = state.demo.lock();
        demo.context = Some(context.clone());
        demo.status.rule_activated = trigger.label().to_string();
        demo.status.last_message_time = Some(Utc::now());
        demo.session_id.clone()
    };
    info!("[orchestrator] trigger {} fired for {}", trigger.tag(), context.customer_name);
    sink.emit(&DemoEvent::Context { context: context.clone() });
    sink.emit(&DemoEvent::Status { status: state.demo.lock().status.clone() });

    let request = payload::trigger_payload(&session_id, &context, trigger, None);
    let reply = state.gateway.send_trigger(&request).await;
    if !state.is_current(epoch) {
        return;
    }

    let Some(raw) = reply else {
        end(state, sink, &session_id);
        return;
    };
    if normalizer::should_stop(Some(&raw)) {
        end(state, sink, &session_id);
        return;
    }

    let trace = activity::trigger_activity(trigger, &context);
    let Some(message) = normalizer::normalize(&raw, Utc::now(), Some(trace)) else {
        end(state, sink, &session_id);
        return;
    };
    if message.text == STOP_SENTINEL {
        end(state, sink, &session_id);
        return;
    }

    let seed_role = message.role;
    let seed_text = message.text.clone();
    state.push_message(sink, message);

    if auto_loop && seed_role == Role::Assistant && state.conversation_active() {
        run_auto_loop(
            state,
            sink,
            epoch,
            seed_text,
            context.customer_name,
            context.salesperson,
            session_id,
        )
        .await;
    }
}

/// The automated customer↔assistant exchange. Each iteration asks the
/// simulated-customer webhook to answer the last assistant message, renders
/// the customer turn, forwards it to the assistant webhook, renders the
/// reply, and continues while the reply stays assistant-role and the
/// conversation is still the live epoch. Unbounded by design — only the
/// upstream service ends the exchange.
pub async fn run_auto_loop(
    state: &EngineState,
    sink: &dyn EventSink,
    epoch: u64,
    mut seed: String,
    customer_name: String,
    salesperson: String,
    session_id: String,
) {
    loop {
        if normalizer::should_stop_text(&seed) {
            break;
        }

        let request =
            payload::customer_agent_payload(&session_id, &customer_name, &salesperson, &seed);
        let reply = state.gateway.send_customer_agent(&request).await;
        if !state.is_current(epoch) {
            return;
        }
        let Some(raw) = reply else { break };
        if normalizer::should_stop(Some(&raw)) {
            break;
        }

        let trace = activity::loop_activity(&salesperson, true);
        let Some(customer_turn) = normalizer::normalize(&raw, Utc::now(), Some(trace)) else {
            break;
        };
        if customer_turn.text == STOP_SENTINEL {
            break;
        }
        let customer_text = customer_turn.text.clone();
        state.push_message(sink, customer_turn);

        let forward = payload::assistant_forward_payload(
            &session_id,
            &customer_name,
            &salesperson,
            &customer_text,
        );
        let reply = state.gateway.send_assistant_forward(&forward).await;
        if !state.is_current(epoch) {
            return;
        }
        let Some(raw) = reply else { break };
        if normalizer::should_stop(Some(&raw)) {
            break;
        }

        let trace = activity::loop_activity(&salesperson, false);
        let Some(assistant_turn) = normalizer::normalize(&raw, Utc::now(), Some(trace)) else {
            break;
        };
        let next_role = assistant_turn.role;
        let next_text = assistant_turn.text.clone();
        state.push_message(sink, assistant_turn);

        if next_role == Role::Assistant && state.conversation_active() {
            seed = next_text;
        } else {
            break;
        }
    }

    end(state, sink, &session_id);
}

/// User-typed message: render it, forward once to the assistant webhook,
/// render the single reply. Never re-enters the automated loop.
pub async fn send_manual(state: &EngineState, sink: &dyn EventSink, text: String) {
    let epoch = state.current_epoch();
    let (session_id, customer_name, salesperson) = {
        let demo = state.demo.lock();
        match &demo.context {
            Some(context) => (
                demo.session_id.clone(),
                context.customer_name.clone(),
                context.salesperson.clone(),
            ),
            None => (demo.session_id.clone(), String::new(), String::new()),
        }
    };

    let sent = ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        role: Role::Customer,
        text: text.clone(),
        timestamp: Utc::now(),
        sender_name: (!customer_name.is_empty()).then(|| customer_name.clone()),
        background_activity: None,
    };
    state.push_message(sink, sent);

    let forward =
        payload::assistant_forward_payload(&session_id, &customer_name, &salesperson, &text);
    let reply = state.gateway.send_assistant_forward(&forward).await;
    if !state.is_current(epoch) {
        return;
    }
    let Some(raw) = reply else { return };

    let trace = activity::manual_activity(&salesperson);
    let Some(message) = normalizer::normalize(&raw, Utc::now(), Some(trace)) else {
        return;
    };
    if message.text == STOP_SENTINEL {
        end(state, sink, &session_id);
        return;
    }
    state.push_message(sink, message);
}

// ── Lead flow ──────────────────────────────────────────────────────────────

/// Phase 1: fabricate a lead, ship the full record to the lead automation,
/// and render its opener. The reply is rendered as an assistant turn and the
/// rule-activated label is left untouched.
pub async fn generate_lead(state: &EngineState, sink: &dyn EventSink, source: LeadSource) -> Lead {
    let lead = {
        let mut rng = rand::thread_rng();
        leads::generate(&mut rng, source)
    };

    let epoch = state.current_epoch();
    let session_id = {
        let mut demo = state.demo.lock();
        demo.lead = Some(lead.clone());
        demo.initial_lead_sent = false;
        demo.session_id.clone()
    };
    info!("[orchestrator] {} lead generated for {}", lead.channel, lead.customer_name);
    sink.emit(&DemoEvent::Lead { lead: lead.clone() });

    let request = payload::lead_intro_payload(&session_id, &lead);
    let reply = state.gateway.send_lead_intro(&request).await;
    if !state.is_current(epoch) {
        return lead;
    }

    if let Some(raw) = reply {
        let trace = activity::lead_activity(&lead, true);
        if let Some(message) = normalizer::normalize(&raw, Utc::now(), Some(trace)) {
            // Lead openers always render on the assistant side of the chat.
            state.push_message(
                sink,
                ChatMessage {
                    role: Role::Assistant,
                    ..message
                },
            );
            state.demo.lock().initial_lead_sent = true;
        }
    }

    lead
}

/// Phase 2: the customer's reply travels up with only the session id — the
/// automation recalls the lead context from its own state.
pub async fn send_lead_reply(
    state: &EngineState,
    sink: &dyn EventSink,
    text: String,
) -> EngineResult<()> {
    let epoch = state.current_epoch();
    let (session_id, customer_name) = {
        let demo = state.demo.lock();
        let Some(lead) = &demo.lead else {
            return Err(EngineError::Config("no active lead".to_string()));
        };
        (demo.session_id.clone(), lead.customer_name.clone())
    };

    let sent = ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        role: Role::Customer,
        text: text.clone(),
        timestamp: Utc::now(),
        sender_name: Some(customer_name),
        background_activity: None,
    };
    state.push_message(sink, sent);

    let request = payload::lead_reply_payload(&session_id, &text);
    let reply = state.gateway.send_lead_reply(&request).await;
    if !state.is_current(epoch) {
        return Ok(());
    }

    if let Some(raw) = reply {
        let lead = state.demo.lock().lead.clone();
        let trace = lead.as_ref().map(|l| activity::lead_activity(l, false));
        if let Some(message) = normalizer::normalize(&raw, Utc::now(), trace) {
            state.push_message(
                sink,
                ChatMessage {
                    role: Role::Assistant,
                    ..message
                },
            );
        }
    }

    Ok(())
}

// ── Reset & mode ───────────────────────────────────────────────────────────

/// Discard the transcript and all working state, invalidate in-flight
/// continuations, and hand out a fresh session id.
pub fn reset_demo(state: &EngineState, sink: &dyn EventSink) -> String {
    state.invalidate();
    let session_id = generate::session_id();
    {
        let mut demo = state.demo.lock();
        demo.session_id = session_id.clone();
        demo.messages.clear();
        demo.context = None;
        demo.lead = None;
        demo.initial_lead_sent = false;
        demo.status = Default::default();
    }
    info!("[orchestrator] demo reset, new session {}", session_id);
    sink.emit(&DemoEvent::Reset { session_id: session_id.clone() });
    session_id
}

/// Switch demo tabs: clears the working state like a reset but keeps the
/// session id and status panel.
pub fn set_demo_mode(state: &EngineState, sink: &dyn EventSink, mode: DemoMode) {
    {
        let mut demo = state.demo.lock();
        if demo.mode == mode {
            return;
        }
        demo.mode = mode;
        demo.messages.clear();
        demo.context = None;
        demo.lead = None;
        demo.initial_lead_sent = false;
    }
    state.invalidate();
    sink.emit(&DemoEvent::ModeChanged { mode });
}

fn end(state: &EngineState, sink: &dyn EventSink, session_id: &str) {
    state.end_conversation();
    sink.emit(&DemoEvent::ConversationEnded {
        session_id: session_id.to_string(),
    });
}
