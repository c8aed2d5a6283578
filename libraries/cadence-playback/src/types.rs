//! Core types for playback management

use cadence_core::Track;
use serde::{Deserialize, Serialize};

/// Playback phase of the controller's per-track state machine
///
/// `Idle → Loading → Playing ⇄ Paused`; a finished track routes back to
/// `Loading` (repeat-one or advance) or `Idle` (empty queue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPhase {
    /// Nothing has ever been loaded
    Idle,

    /// A source is bound and playback was requested, start not yet confirmed
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for the player controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0 - 1.0, default: 1.0)
    pub volume: f64,

    /// Initial repeat-one state (default: off)
    pub repeat: bool,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            repeat: false,
            shuffle: false,
        }
    }
}

/// Serializable snapshot of the player state
///
/// Consumed by the render collaborator to draw the now-playing display;
/// the controller remains the single source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    /// Current playback phase
    pub phase: PlayerPhase,

    /// Index of the active track, if any
    pub current_index: Option<usize>,

    /// The active track's metadata, if any
    pub track: Option<Track>,

    /// Playback position in seconds
    pub position_secs: f64,

    /// Track duration in seconds, once known
    pub duration_secs: Option<f64>,

    /// Volume (0.0 - 1.0)
    pub volume: f64,

    /// Repeat-one toggle
    pub repeat: bool,

    /// Shuffle toggle
    pub shuffle: bool,
}
