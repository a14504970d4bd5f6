// Showroom Engine — Demo Orchestration Runtime
//
// Owns everything behind the chat window: synthetic data generation, webhook
// payloads and I/O, response normalization, the conversation loop, and the
// settings file. The commands/ layer is a thin IPC veneer over this module.

pub mod activity;
pub mod events;
pub mod gateway;
pub mod generate;
pub mod leads;
pub mod normalizer;
pub mod orchestrator;
pub mod payload;
pub mod settings;
pub mod state;
