//! Input routing
//!
//! Stateless translation of user gestures (control clicks, keyboard
//! shortcuts, slider drags) into player operations. Shortcuts are
//! app-level, not OS-level: they only apply while no text field has
//! focus, which the host reports via the `editing` flag.

use crate::controller::PlayerController;
use crate::prefs::LikedTracks;

/// A raw user gesture, as reported by the host
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Play/pause control activated
    PlayPause,
    /// Next control activated
    Next,
    /// Previous control activated
    Previous,
    /// Repeat control activated
    Repeat,
    /// Shuffle control activated
    Shuffle,
    /// Like control activated
    Like,
    /// Seek input changed (fraction of duration, 0.0 - 1.0)
    Seek(f64),
    /// Volume input changed (0.0 - 1.0)
    Volume(f64),
    /// Row-level play affordance on track `i`
    PlayRow(usize),
    /// "Play all" activated
    PlayAll,
    /// A key press, with whether a text field currently has focus
    Key {
        /// Which key
        key: Key,
        /// True while an input/textarea has focus; shortcuts are swallowed
        editing: bool,
    },
}

/// Keyboard shortcuts recognized by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space bar - play/pause
    Space,
    /// `k` - play/pause
    K,
    /// `l` - next track
    L,
    /// `j` - previous track
    J,
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM keyboard event (`code`, `key`) onto a shortcut
    pub fn from_dom(code: &str, key: &str) -> Self {
        if code == "Space" {
            return Self::Space;
        }
        match key.to_ascii_lowercase().as_str() {
            "k" => Self::K,
            "l" => Self::L,
            "j" => Self::J,
            _ => Self::Other,
        }
    }
}

/// A resolved player operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    /// Toggle play/pause
    TogglePlayPause,
    /// Advance to the next track
    Next,
    /// Previous track (or restart current)
    Previous,
    /// Flip repeat-one
    ToggleRepeat,
    /// Flip shuffle
    ToggleShuffle,
    /// Toggle the current track's liked state
    ToggleLike,
    /// Seek to a fraction of the duration
    SeekTo(f64),
    /// Set the volume level
    SetVolume(f64),
    /// Load and play the track at an index
    LoadAndPlay(usize),
}

/// Resolve a gesture to a player action
///
/// Returns `None` for gestures that map to nothing (unbound keys, shortcuts
/// while editing). "Play all" resolves to loading index 0; the controller's
/// bounds check makes that a no-op on an empty queue.
pub fn resolve(gesture: &Gesture) -> Option<PlayerAction> {
    match *gesture {
        Gesture::PlayPause => Some(PlayerAction::TogglePlayPause),
        Gesture::Next => Some(PlayerAction::Next),
        Gesture::Previous => Some(PlayerAction::Previous),
        Gesture::Repeat => Some(PlayerAction::ToggleRepeat),
        Gesture::Shuffle => Some(PlayerAction::ToggleShuffle),
        Gesture::Like => Some(PlayerAction::ToggleLike),
        Gesture::Seek(fraction) => Some(PlayerAction::SeekTo(fraction)),
        Gesture::Volume(level) => Some(PlayerAction::SetVolume(level)),
        Gesture::PlayRow(index) => Some(PlayerAction::LoadAndPlay(index)),
        Gesture::PlayAll => Some(PlayerAction::LoadAndPlay(0)),
        Gesture::Key { editing: true, .. } => None,
        Gesture::Key { key, .. } => match key {
            Key::Space | Key::K => Some(PlayerAction::TogglePlayPause),
            Key::L => Some(PlayerAction::Next),
            Key::J => Some(PlayerAction::Previous),
            Key::Other => None,
        },
    }
}

/// Apply a resolved action to the player and preference store
pub fn dispatch(action: PlayerAction, player: &mut PlayerController, liked: &mut LikedTracks) {
    match action {
        PlayerAction::TogglePlayPause => player.toggle_play_pause(),
        PlayerAction::Next => player.next(),
        PlayerAction::Previous => player.previous(),
        PlayerAction::ToggleRepeat => {
            player.toggle_repeat();
        }
        PlayerAction::ToggleShuffle => {
            player.toggle_shuffle();
        }
        PlayerAction::ToggleLike => {
            if let Some(id) = player.current_track().map(|t| t.id.clone()) {
                liked.toggle(&id);
            }
        }
        PlayerAction::SeekTo(fraction) => player.seek_to(fraction),
        PlayerAction::SetVolume(level) => player.set_volume(level),
        PlayerAction::LoadAndPlay(index) => player.load_and_play(index),
    }
}
