//! Score history log
//!
//! Persisted to LocalStorage on the web, newest entry first. The driver
//! records a run's final score here right before it replaces the terminal
//! state with a fresh one.

use serde::{Deserialize, Serialize};

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Final score of the run
    pub score: u64,
    /// Unix timestamp (ms) when the run ended
    pub timestamp_ms: f64,
}

/// Log of finished runs, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreHistory {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreHistory {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lane_rush_history";

    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a finished run at the front of the log
    pub fn record(&mut self, score: u64, timestamp_ms: f64) {
        self.entries.insert(0, ScoreEntry {
            score,
            timestamp_ms,
        });
    }

    /// Most recent run, if any
    pub fn latest(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the log from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(history) = serde_json::from_str::<ScoreHistory>(&json) {
                    log::info!("Loaded {} past runs", history.entries.len());
                    return history;
                }
            }
        }

        log::info!("No score history found, starting fresh");
        Self::new()
    }

    /// Save the log to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Score history saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
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
    fn test_record_keeps_newest_first() {
        let mut history = ScoreHistory::new();
        history.record(10, 1_000.0);
        history.record(25, 2_000.0);
        history.record(5, 3_000.0);

        let scores: Vec<u64> = history.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![5, 25, 10]);
        assert_eq!(history.latest().map(|e| e.score), Some(5));
    }

    #[test]
    fn test_empty_log() {
        let history = ScoreHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut history = ScoreHistory::new();
        history.record(42, 1_700_000_000_000.0);

        let json = serde_json::to_string(&history).unwrap();
        let back: ScoreHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
