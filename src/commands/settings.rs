// Showroom Commands — Settings
//
// Theme preference and webhook endpoint overrides. The settings struct is
// the single durable piece of state; every setter writes through to the
// JSON file immediately.

use tauri::State;

use crate::atoms::types::Theme;
use crate::engine::gateway::EndpointConfig;
use crate::engine::settings::{self, Settings};
use crate::engine::state::EngineState;

#[tauri::command]
pub fn get_settings(state: State<'_, EngineState>) -> Settings {
    state.settings.lock().clone()
}

#[tauri::command]
pub fn set_theme(state: State<'_, EngineState>, theme: Theme) -> Result<(), String> {
    let snapshot = {
        let mut current = state.settings.lock();
        current.theme = theme;
        current.clone()
    };
    settings::save(&snapshot).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_endpoints(
    state: State<'_, EngineState>,
    endpoints: EndpointConfig,
) -> Result<(), String> {
    state.gateway.set_endpoints(endpoints.clone());
    let snapshot = {
        let mut current = state.settings.lock();
        current.endpoints = endpoints;
        current.clone()
    };
    settings::save(&snapshot).map_err(|e| e.to_string())
}
