//! Game settings
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::sim::Geometry;

/// Tunable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area size in tiles along the short side. Larger values shrink
    /// every object and fit more of them on screen.
    pub game_size: u32,
    /// Lives at the start of each round
    pub starting_lives: u32,
    /// Fixed RNG seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_size: 18,
            starting_lives: 3,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Play area geometry for a screen of the given size
    pub fn geometry(&self, width: f32, height: f32) -> Geometry {
        Geometry::from_screen(width, height, self.game_size)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "drag_merge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Discarding stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "starting_lives": 5 }"#).unwrap();
        assert_eq!(s.starting_lives, 5);
        assert_eq!(s.game_size, 18);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json(r#"{ "game_size": "big" }"#),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let s = Settings {
            game_size: 12,
            starting_lives: 1,
            seed: Some(99),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_geometry_uses_game_size() {
        let s = Settings {
            game_size: 10,
            ..Default::default()
        };
        assert_eq!(s.geometry(600.0, 1000.0).unit, 60.0);
    }
}
