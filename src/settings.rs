//! User settings and preferences
//!
//! Persisted as JSON next to the binary. Load failures are absorbed with a
//! logged warning and fall back to defaults; the sim itself never reads a
//! file. Game rules are deliberately not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Input preferences applied by the host when decoding pointer events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Radians of camera rotation per pixel of pointer travel
    pub mouse_sensitivity: f32,
    /// Flip the pitch axis
    pub invert_y: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.01,
            invert_y: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, defaulting on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} is invalid: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("could not save settings to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }

    /// Pitch delta for a vertical pointer movement, respecting invert-Y
    pub fn pitch_delta(&self, pointer_dy: f32) -> f32 {
        let sign = if self.invert_y { -1.0 } else { 1.0 };
        sign * pointer_dy * self.mouse_sensitivity
    }

    /// Yaw delta for a horizontal pointer movement
    pub fn yaw_delta(&self, pointer_dx: f32) -> f32 {
        -pointer_dx * self.mouse_sensitivity
    }
}
