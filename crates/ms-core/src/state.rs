//! Hydrated application-state snapshot.

use serde::{Deserialize, Serialize};

/// Slice of global application state hydrated from storage at startup.
///
/// Written only by the hydration task during startup; disjoint from the
/// current-user field the launch router restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppStateSnapshot {
    pub sound_enabled: bool,
    pub music_volume: f32,
    pub completed_intro_steps: u32,
}

impl Default for AppStateSnapshot {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_volume: 0.8,
            completed_intro_steps: 0,
        }
    }
}
