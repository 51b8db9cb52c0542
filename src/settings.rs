//! User settings stored as settings.json in the app data directory

use crate::constants::DEFAULT_SERVER_URL;
use crate::types::GameSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Game server
    pub server_url: String,

    // Last-used setup values, prefilled in the setup dialog
    pub board_height: u32,
    pub board_width: u32,
    pub win_tile: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let game = GameSettings::default();
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            server_url: DEFAULT_SERVER_URL.to_string(),
            board_height: game.height,
            board_width: game.width,
            win_tile: game.win,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            height: self.board_height,
            width: self.board_width,
            win: self.win_tile,
        }
    }
}
