//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the game. Load and save are
//! best-effort: any failure falls back to defaults or is logged and
//! swallowed, never surfaced to the caller.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Audio preferences toggled from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Looping ambient track on the menu and during play
    pub music_enabled: bool,
    /// One-shot click/alert cues
    pub sfx_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "settings file {} is corrupt ({err}), using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to `path`; failures are logged and swallowed
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("could not encode settings: {err}"),
        }
    }
}
