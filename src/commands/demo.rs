// Showroom Commands — Post-Purchase Demo
//
// Trigger firing, manual sends, reset, tab switching, and the full-state
// snapshot a (re)mounting frontend pulls before subscribing to events.

use serde::Serialize;
use tauri::State;

use crate::atoms::types::{ChatMessage, DemoContext, DemoMode, Lead, SystemStatus, TriggerType};
use crate::engine::orchestrator;
use crate::engine::state::EngineState;

#[derive(Debug, Clone, Serialize)]
pub struct DemoSnapshot {
    pub session_id: String,
    pub mode: DemoMode,
    pub messages: Vec<ChatMessage>,
    pub context: Option<DemoContext>,
    pub lead: Option<Lead>,
    pub status: SystemStatus,
    pub conversation_active: bool,
}

/// Fire a post-purchase trigger. `auto_loop` defaults to true; pass false to
/// stop after the assistant's opener (manual-mode demos).
#[tauri::command]
pub async fn trigger_scenario(
    app_handle: tauri::AppHandle,
    state: State<'_, EngineState>,
    trigger: TriggerType,
    auto_loop: Option<bool>,
) -> Result<(), String> {
    orchestrator::run_trigger(state.inner(), &app_handle, trigger, auto_loop.unwrap_or(true))
        .await;
    Ok(())
}

/// Send a user-typed customer message to the assistant webhook.
#[tauri::command]
pub async fn send_manual_message(
    app_handle: tauri::AppHandle,
    state: State<'_, EngineState>,
    text: String,
) -> Result<(), String> {
    orchestrator::send_manual(state.inner(), &app_handle, text).await;
    Ok(())
}

/// Reset the demo: fresh session id, empty transcript, cleared context.
#[tauri::command]
pub fn refresh_demo(app_handle: tauri::AppHandle, state: State<'_, EngineState>) -> String {
    orchestrator::reset_demo(state.inner(), &app_handle)
}

/// Switch between the post-purchase and lead-followup tabs.
#[tauri::command]
pub fn set_demo_mode(
    app_handle: tauri::AppHandle,
    state: State<'_, EngineState>,
    mode: DemoMode,
) {
    orchestrator::set_demo_mode(state.inner(), &app_handle, mode);
}

/// Full current state for rendering without replaying events.
#[tauri::command]
pub fn demo_snapshot(state: State<'_, EngineState>) -> DemoSnapshot {
    let demo = state.demo.lock();
    DemoSnapshot {
        session_id: demo.session_id.clone(),
        mode: demo.mode,
        messages: demo.messages.clone(),
        context: demo.context.clone(),
        lead: demo.lead.clone(),
        status: demo.status.clone(),
        conversation_active: state.conversation_active(),
    }
}
