//! Best score persistence
//!
//! Persisted to LocalStorage as a plain number under `"highscore"`.

use serde::{Deserialize, Serialize};

/// The single best score across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "highscore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Record a finished round's score. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Parse a stored value; older saves wrote the number as a string
    /// (used only in wasm32)
    #[allow(dead_code)]
    fn parse(raw: &str) -> Option<u64> {
        let raw = raw.trim();
        serde_json::from_str::<u64>(raw)
            .ok()
            .or_else(|| serde_json::from_str::<String>(raw).ok()?.trim().parse().ok())
            .or_else(|| raw.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u64))
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(best) = Self::parse(&raw) {
                    log::info!("Loaded high score {}", best);
                    return Self::new(best);
                }
                log::warn!("Ignoring unreadable high score {:?}", raw);
            }
        }

        Self::default()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.best.to_string());
            log::info!("High score saved ({})", self.best);
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
    fn test_record_only_improvements() {
        let mut hs = HighScore::new(10);
        assert!(!hs.record(5));
        assert!(!hs.record(10));
        assert!(hs.record(11));
        assert_eq!(hs.best, 11);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(HighScore::parse("42"), Some(42));
        assert_eq!(HighScore::parse("\"17\""), Some(17));
        assert_eq!(HighScore::parse(" 8 "), Some(8));
        assert_eq!(HighScore::parse("3.0"), Some(3));
        assert_eq!(HighScore::parse("garbage"), None);
        assert_eq!(HighScore::parse("-4"), None);
    }
}
