//! Cadence Player - Playback Management
//!
//! Platform-agnostic playlist playback for Cadence Player.
//!
//! This crate provides:
//! - Queue navigation (wrap-around next/previous, shuffle, repeat-one)
//! - A playback controller driving a single media element
//! - Lifecycle event handling with stale-load protection
//! - Durable liked-track preferences
//! - Gesture and keyboard input routing
//!
//! # Architecture
//!
//! `cadence-playback` never touches a real audio element directly. The
//! playback primitive is abstracted behind the [`MediaElement`] trait; the
//! host (a browser page via the `wasm` feature, or a test harness) owns the
//! real element, forwards its lifecycle events in via
//! [`PlayerController::handle_media_event`], and drains display updates out
//! via [`PlayerController::take_events`].
//!
//! # Example
//!
//! ```rust
//! use cadence_playback::{MediaElement, PlayerConfig, PlayerController, Result};
//! use cadence_core::Track;
//!
//! struct SilentMedia;
//!
//! impl MediaElement for SilentMedia {
//!     fn set_source(&mut self, _url: &str) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_position(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _level: f64) {}
//!     fn duration(&self) -> Option<f64> { None }
//! }
//!
//! let mut player = PlayerController::new(Box::new(SilentMedia), PlayerConfig::default());
//! player.set_queue(vec![
//!     Track::new("a", "Track A", "Artist", "/media/a.mp3"),
//!     Track::new("b", "Track B", "Artist", "/media/b.mp3"),
//! ]);
//!
//! // First play gesture starts the queue from the top
//! player.toggle_play_pause();
//! assert_eq!(player.current_index(), Some(0));
//! ```

pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod prefs;
pub mod queue;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use controller::{MediaElement, PlayerController};
pub use error::{PlayerError, Result};
pub use events::{MediaEvent, PlayerEvent};
pub use input::{dispatch, resolve, Gesture, Key, PlayerAction};
pub use prefs::{FileBackend, LikedTracks, MemoryBackend, PrefsBackend};
pub use queue::Queue;
pub use types::{PlayerConfig, PlayerPhase, PlayerSnapshot};
