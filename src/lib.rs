// Showroom — dealership messaging assistant demo.
//
// The Rust side owns all demo logic: synthetic customers and leads, webhook
// payload construction and delivery, response normalization, and the
// automated customer↔assistant conversation loop. The webview renders the
// transcript and panels from `demo-event` emissions and the snapshot
// command; it holds no business logic.

use log::info;

pub mod atoms;
pub mod commands;
pub mod engine;

use commands::demo::{
    demo_snapshot, refresh_demo, send_manual_message, set_demo_mode, trigger_scenario,
};
use commands::leads::{generate_demo_lead, send_lead_reply};
use commands::settings::{get_settings, set_endpoints, set_theme};
use engine::state::EngineState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let settings = engine::settings::load();
    info!("[showroom] starting with theme {:?}", settings.theme);

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .manage(EngineState::new(settings))
        .invoke_handler(tauri::generate_handler![
            trigger_scenario,
            send_manual_message,
            refresh_demo,
            set_demo_mode,
            demo_snapshot,
            generate_demo_lead,
            send_lead_reply,
            get_settings,
            set_theme,
            set_endpoints
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
