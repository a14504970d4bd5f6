// Showroom Commands — Inbound Lead Demo
//
// Two-phase lead flow: phase 1 generates and ships a synthetic lead, phase 2
// forwards the customer's typed reply against the same session.

use tauri::State;

use crate::atoms::types::{Lead, LeadSource};
use crate::engine::orchestrator;
use crate::engine::state::EngineState;

/// Generate a synthetic lead from the given source and send the phase-1
/// record to the lead automation. Returns the generated lead for display.
#[tauri::command]
pub async fn generate_demo_lead(
    app_handle: tauri::AppHandle,
    state: State<'_, EngineState>,
    source: LeadSource,
) -> Result<Lead, String> {
    Ok(orchestrator::generate_lead(state.inner(), &app_handle, source).await)
}

/// Phase 2: forward the customer's reply (session id + text only).
#[tauri::command]
pub async fn send_lead_reply(
    app_handle: tauri::AppHandle,
    state: State<'_, EngineState>,
    text: String,
) -> Result<(), String> {
    orchestrator::send_lead_reply(state.inner(), &app_handle, text)
        .await
        .map_err(|e| e.to_string())
}
