// Showroom Engine — Settings Persistence
//
// The only durable state in the app: theme preference plus webhook endpoint
// overrides, stored as a single JSON file under the platform data dir.
// A missing or corrupt file silently falls back to defaults.

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::atoms::error::EngineResult;
use crate::atoms::types::Theme;
use crate::engine::gateway::EndpointConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

fn settings_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showroom")
        .join("settings.json")
}

pub fn load_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("[settings] corrupt settings file, using defaults: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

pub fn save_to(path: &Path, settings: &Settings) -> EngineResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load() -> Settings {
    load_from(&settings_path())
}

pub fn save(settings: &Settings) -> EngineResult<()> {
    save_to(&settings_path(), settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_the_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.theme = Theme::Dark;
        settings.endpoints.customer_agent_url = "https://hooks.example/ca".to_string();

        save_to(&path, &settings).expect("save");
        let loaded = load_from(&path);
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.endpoints.customer_agent_url, "https://hooks.example/ca");
    }

    #[test]
    fn missing_or_corrupt_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        assert_eq!(load_from(&missing).theme, Theme::Auto);

        let corrupt = dir.path().join("bad.json");
        std::fs::write(&corrupt, "{not json").expect("write");
        assert_eq!(load_from(&corrupt).theme, Theme::Auto);
    }
}
