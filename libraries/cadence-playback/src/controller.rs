//! Player controller - core orchestration
//!
//! Single source of truth for "what is loaded and playing". Mediates
//! between the queue model and the playback primitive, translates user
//! intent into state transitions, and reconciles the primitive's
//! asynchronous lifecycle events back into display state.

use crate::{
    error::Result,
    events::{MediaEvent, PlayerEvent},
    queue::Queue,
    types::{PlayerConfig, PlayerPhase, PlayerSnapshot},
};
use cadence_core::Track;
use rand::thread_rng;
use tracing::debug;

/// A `previous` gesture within this many seconds of the track start is a
/// deliberate track-back; later than this it restarts the current track.
const PREV_RESTART_THRESHOLD_SECS: f64 = 2.0;

/// Playback primitive collaborator
///
/// The single underlying media element (an `<audio>` element in the
/// browser, a fake in tests). The controller owns it exclusively; no other
/// component touches it. Calls are fire-and-forget: success or failure of
/// a playback request surfaces later as a [`MediaEvent`], not through the
/// return value ([`MediaElement::play`] may report an immediate rejection,
/// which the controller swallows).
///
/// Deliberately not `Send`: browser media handles are single-threaded.
pub trait MediaElement {
    /// Bind a new media reference, superseding any in-flight load
    fn set_source(&mut self, url: &str);

    /// Request playback start/resume
    ///
    /// # Errors
    /// Returns an error if the element refuses to start (autoplay policy)
    fn play(&mut self) -> Result<()>;

    /// Request pause
    fn pause(&mut self);

    /// Move the playhead, in seconds from track start
    fn set_position(&mut self, seconds: f64);

    /// Set the output volume (0.0 - 1.0)
    fn set_volume(&mut self, level: f64);

    /// Total duration of the bound media, once known
    fn duration(&self) -> Option<f64>;
}

/// Central playback controller
///
/// Owns the queue, the toggle flags, the per-track state machine
/// (`Idle → Loading → Playing ⇄ Paused`) and the exclusive handle to the
/// playback primitive. Handlers run to completion on the host's event
/// loop; there is no internal locking.
pub struct PlayerController {
    media: Box<dyn MediaElement>,

    queue: Queue,
    current: Option<usize>,

    phase: PlayerPhase,
    position_secs: f64,
    duration_secs: Option<f64>,
    volume: f64,

    repeat: bool,
    shuffle: bool,

    /// Load generation; bumped on every source rebind so late events from a
    /// superseded load can be recognized and dropped.
    generation: u64,

    /// Buffered display updates for the host to drain
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a new controller around a playback primitive
    pub fn new(mut media: Box<dyn MediaElement>, config: PlayerConfig) -> Self {
        let volume = config.volume.clamp(0.0, 1.0);
        media.set_volume(volume);

        Self {
            media,
            queue: Queue::new(),
            current: None,
            phase: PlayerPhase::Idle,
            position_secs: 0.0,
            duration_secs: None,
            volume,
            repeat: config.repeat,
            shuffle: config.shuffle,
            generation: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue =====

    /// Replace the queue wholesale
    ///
    /// Resets the current index and phase; any in-flight load is
    /// superseded.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.current = None;
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.generation += 1;
        self.set_phase(PlayerPhase::Idle);
        self.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Number of tracks in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The queue contents, in baseline playback order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    // ===== Playback control =====

    /// Load the track at `index` and request playback
    ///
    /// Out-of-bounds indices can only arise from stale UI state and are
    /// silently ignored. A playback-start rejection (autoplay policy) is
    /// swallowed: the phase stays `Loading` until a lifecycle event
    /// corrects it.
    pub fn load_and_play(&mut self, index: usize) {
        let Some(track) = self.queue.get(index) else {
            debug!(index, "ignoring load outside queue bounds");
            return;
        };
        let track_id = track.id.clone();
        let url = track.media_url.clone();

        self.generation += 1;
        self.current = Some(index);
        self.position_secs = 0.0;
        self.duration_secs = None;

        self.media.set_source(&url);
        self.emit(PlayerEvent::TrackChanged { index, track_id });
        self.set_phase(PlayerPhase::Loading);
        self.request_play();
    }

    /// Toggle between playing and paused
    ///
    /// If nothing has ever been loaded and the queue is non-empty, this
    /// starts the queue from the top.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            if !self.queue.is_empty() {
                self.load_and_play(0);
            }
            return;
        }

        if self.phase == PlayerPhase::Playing {
            self.media.pause();
        } else {
            self.request_play();
        }
    }

    /// Advance to the next track (sequential or shuffled)
    pub fn next(&mut self) {
        let Some(index) = self.queue.next(self.current, self.shuffle, &mut thread_rng()) else {
            return;
        };
        self.load_and_play(index);
    }

    /// Go back to the previous track, or restart the current one
    ///
    /// More than two seconds into a track, a single tap is treated as a
    /// scrub back to the start rather than a navigation.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.position_secs > PREV_RESTART_THRESHOLD_SECS {
            self.media.set_position(0.0);
            self.position_secs = 0.0;
            self.emit_position();
            return;
        }

        if let Some(index) = self.queue.prev(self.current) {
            self.load_and_play(index);
        }
    }

    /// Seek to a fraction of the track duration (0.0 - 1.0)
    ///
    /// No-op while the duration is unknown.
    pub fn seek_to(&mut self, fraction: f64) {
        let known = self.duration_secs.or_else(|| self.media.duration());
        let Some(duration) = known.filter(|d| d.is_finite() && *d > 0.0) else {
            return;
        };
        self.duration_secs = Some(duration);

        let position = fraction.clamp(0.0, 1.0) * duration;
        self.media.set_position(position);
        self.position_secs = position;
        self.emit_position();
    }

    /// Set the volume (clamped to 0.0 - 1.0)
    pub fn set_volume(&mut self, level: f64) {
        self.volume = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            self.volume
        };
        self.media.set_volume(self.volume);
        self.emit(PlayerEvent::VolumeChanged { level: self.volume });
    }

    /// Flip the repeat-one toggle, returning the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Flip the shuffle toggle, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    // ===== Lifecycle events =====

    /// Feed a lifecycle event from the playback primitive
    ///
    /// `generation` identifies the load the event belongs to; events from a
    /// superseded load are dropped so a stale `Ended` or `Started` cannot
    /// corrupt the state of the track that replaced it.
    pub fn handle_media_event(&mut self, generation: u64, event: MediaEvent) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale media event");
            return;
        }

        match event {
            MediaEvent::Started => {
                self.set_phase(PlayerPhase::Playing);
            }
            MediaEvent::Paused => {
                if self.phase == PlayerPhase::Playing {
                    self.set_phase(PlayerPhase::Paused);
                }
            }
            MediaEvent::PositionChanged {
                position_secs,
                duration_secs,
            } => {
                self.position_secs = position_secs;
                self.duration_secs = duration_secs.filter(|d| d.is_finite() && *d > 0.0);
                self.emit_position();
            }
            MediaEvent::Ended => self.on_track_ended(),
        }
    }

    /// Natural end of the current track
    ///
    /// Repeat-one restarts the same track; otherwise the queue advances
    /// (the scrub-back affordance of [`Self::previous`] does not apply to
    /// automatic advance). An emptied queue drops back to `Idle`.
    fn on_track_ended(&mut self) {
        if self.repeat && self.current.is_some() {
            self.media.set_position(0.0);
            self.position_secs = 0.0;
            self.emit_position();
            self.set_phase(PlayerPhase::Loading);
            self.request_play();
            return;
        }

        if self.queue.is_empty() {
            self.current = None;
            self.set_phase(PlayerPhase::Idle);
            return;
        }

        self.next();
    }

    // ===== State queries =====

    /// Current playback phase
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    /// Whether audio is actually running
    pub fn is_playing(&self) -> bool {
        self.phase == PlayerPhase::Playing
    }

    /// Index of the active track, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The active track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.queue.get(i))
    }

    /// Playback position in seconds
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Track duration in seconds, once known
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Current volume (0.0 - 1.0)
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Repeat-one toggle state
    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    /// Shuffle toggle state
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current load generation (for tagging lifecycle events)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Serializable state snapshot for the render collaborator
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            phase: self.phase,
            current_index: self.current,
            track: self.current_track().cloned(),
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
            volume: self.volume,
            repeat: self.repeat,
            shuffle: self.shuffle,
        }
    }

    /// Drain buffered display events
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn request_play(&mut self) {
        if let Err(err) = self.media.play() {
            // Autoplay policy etc. Resolved by the next user gesture; the
            // phase is corrected when a Started event eventually arrives.
            debug!(%err, "playback start rejected");
        }
    }

    fn set_phase(&mut self, phase: PlayerPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(PlayerEvent::StateChanged { phase });
        }
    }

    fn emit_position(&mut self) {
        self.emit(PlayerEvent::PositionUpdate {
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
        });
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullMedia;

    impl MediaElement for NullMedia {
        fn set_source(&mut self, _url: &str) {}
        fn play(&mut self) -> Result<()> {
            Ok(())
        }
        fn pause(&mut self) {}
        fn set_position(&mut self, _seconds: f64) {}
        fn set_volume(&mut self, _level: f64) {}
        fn duration(&self) -> Option<f64> {
            None
        }
    }

    fn player() -> PlayerController {
        PlayerController::new(Box::new(NullMedia), PlayerConfig::default())
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track::new(format!("t{i}"), format!("Track {i}"), "Artist", format!("/m/{i}.mp3")))
            .collect()
    }

    #[test]
    fn starts_idle_with_no_index() {
        let player = player();
        assert_eq!(player.phase(), PlayerPhase::Idle);
        assert_eq!(player.current_index(), None);
        assert!(!player.is_playing());
    }

    #[test]
    fn load_outside_bounds_is_ignored() {
        let mut player = player();
        player.set_queue(tracks(2));

        player.load_and_play(5);
        assert_eq!(player.current_index(), None);
        assert_eq!(player.phase(), PlayerPhase::Idle);
    }

    #[test]
    fn toggles_are_idempotent_over_two_flips() {
        let mut player = player();

        assert!(player.toggle_repeat());
        assert!(!player.toggle_repeat());
        assert!(player.toggle_shuffle());
        assert!(!player.toggle_shuffle());
    }

    #[test]
    fn toggles_survive_track_changes() {
        let mut player = player();
        player.set_queue(tracks(3));
        player.toggle_repeat();
        player.toggle_shuffle();

        player.load_and_play(1);
        player.next();

        assert!(player.is_repeat());
        assert!(player.is_shuffle());
    }

    #[test]
    fn volume_is_clamped() {
        let mut player = player();

        player.set_volume(1.5);
        assert_eq!(player.volume(), 1.0);

        player.set_volume(-0.2);
        assert_eq!(player.volume(), 0.0);

        player.set_volume(f64::NAN);
        assert_eq!(player.volume(), 0.0);
    }

    #[test]
    fn seek_without_known_duration_is_a_no_op() {
        let mut player = player();
        player.set_queue(tracks(1));
        player.load_and_play(0);

        player.seek_to(0.5);
        assert_eq!(player.position_secs(), 0.0);
    }

    #[test]
    fn set_queue_supersedes_in_flight_load() {
        let mut player = player();
        player.set_queue(tracks(3));
        player.load_and_play(2);
        let stale = player.generation();

        player.set_queue(tracks(1));
        player.handle_media_event(stale, MediaEvent::Started);

        assert_eq!(player.phase(), PlayerPhase::Idle);
        assert_eq!(player.current_index(), None);
    }
}
