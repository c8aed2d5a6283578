//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Most failure modes in this crate degrade silently (stale UI clicks,
/// autoplay rejection); these variants cover the surfaces that can
/// meaningfully report: the media element boundary and preference
/// persistence.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The media element refused to start playback
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// Preference store could not be written
    #[error("Preference store unavailable: {0}")]
    PrefsUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
