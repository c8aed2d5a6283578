//! Playback events
//!
//! Two event flows meet in the controller:
//! - [`MediaEvent`]: lifecycle notifications coming *in* from the playback
//!   primitive (the host's media element), tagged with the load generation
//!   they belong to so superseded loads can be discarded.
//! - [`PlayerEvent`]: display updates going *out* to the host/render layer,
//!   buffered on the controller and drained with
//!   [`crate::PlayerController::take_events`].

use crate::types::PlayerPhase;
use serde::{Deserialize, Serialize};

/// Lifecycle events emitted by the playback primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playback actually started (or resumed)
    Started,

    /// Playback was paused
    Paused,

    /// Periodic position tick
    PositionChanged {
        /// Current position in seconds
        position_secs: f64,
        /// Total duration in seconds, once the element knows it
        duration_secs: Option<f64>,
    },

    /// The track reached its natural end
    Ended,
}

/// Events emitted by the player for UI synchronization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerEvent {
    /// Playback phase changed (playing, paused, loading, idle)
    StateChanged {
        /// The new phase
        phase: PlayerPhase,
    },

    /// The active track changed
    TrackChanged {
        /// Queue index of the new track
        index: usize,
        /// ID of the new track
        track_id: String,
    },

    /// Position update (periodic)
    PositionUpdate {
        /// Current playback position in seconds
        position_secs: f64,
        /// Track duration in seconds, if known
        duration_secs: Option<f64>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0 - 1.0)
        level: f64,
    },

    /// Queue was replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}
