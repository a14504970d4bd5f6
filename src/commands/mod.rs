// Showroom Command Modules — IPC Layer
//
// Each sub-module is a thin Tauri command wrapper.
// Heavy logic lives in engine/; these functions only
// extract state, delegate, and map errors to String.

pub mod demo;
pub mod leads;
pub mod settings;
