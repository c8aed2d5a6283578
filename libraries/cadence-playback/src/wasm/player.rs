//! WASM-compatible player wrapper

use super::media::{DomMedia, LocalStorageBackend};
use crate::events::{MediaEvent, PlayerEvent};
use crate::input::{dispatch, resolve, Gesture, Key};
use crate::prefs::{LikedTracks, MemoryBackend, PrefsBackend};
use crate::types::PlayerConfig;
use crate::PlayerController;
use cadence_core::Track;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Browser-facing player
///
/// Wraps the core controller with a JavaScript-friendly API. The page owns
/// the `<audio>` element and forwards its lifecycle events through the
/// `notify*` methods; display updates flow back out through the registered
/// callbacks.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlayerController,
    liked: LikedTracks,
    audio: HtmlAudioElement,

    // Event callbacks
    on_state_change: Option<Function>,
    on_track_change: Option<Function>,
    on_position_update: Option<Function>,
    on_volume_change: Option<Function>,
    on_queue_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player bound to an `<audio>` element
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlAudioElement) -> Self {
        console_error_panic_hook::set_once();

        let media = DomMedia::new(audio.clone());
        let backend: Box<dyn PrefsBackend> = match LocalStorageBackend::new() {
            Some(storage) => Box::new(storage),
            None => Box::new(MemoryBackend::new()),
        };

        Self {
            inner: PlayerController::new(Box::new(media), PlayerConfig::default()),
            liked: LikedTracks::load(backend),
            audio,
            on_state_change: None,
            on_track_change: None,
            on_position_update: None,
            on_volume_change: None,
            on_queue_change: None,
        }
    }

    // ===== Queue =====

    /// Replace the queue from a JS array of `{id, title, artist, cover, url}`
    #[wasm_bindgen(js_name = setQueue)]
    pub fn set_queue(&mut self, tracks: JsValue) -> Result<(), JsValue> {
        let tracks: Vec<Track> = serde_wasm_bindgen::from_value(tracks)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse tracks: {e}")))?;

        self.inner.set_queue(tracks);
        self.flush_events();
        Ok(())
    }

    /// Queue length
    #[wasm_bindgen(js_name = queueLength)]
    pub fn queue_length(&self) -> usize {
        self.inner.queue_len()
    }

    // ===== Playback control =====

    /// Load and play the track at `index`
    #[wasm_bindgen(js_name = loadAndPlay)]
    pub fn load_and_play(&mut self, index: usize) {
        self.inner.load_and_play(index);
        self.flush_events();
    }

    /// Toggle play/pause (first press starts the queue from the top)
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) {
        self.inner.toggle_play_pause();
        self.flush_events();
    }

    /// Skip to the next track
    pub fn next(&mut self) {
        self.inner.next();
        self.flush_events();
    }

    /// Previous track, or restart the current one mid-play
    pub fn previous(&mut self) {
        self.inner.previous();
        self.flush_events();
    }

    /// Seek to a fraction of the duration (0.0 - 1.0)
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, fraction: f64) {
        self.inner.seek_to(fraction);
        self.flush_events();
    }

    /// Set volume (0.0 - 1.0)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f64) {
        self.inner.set_volume(level);
        self.flush_events();
    }

    /// Flip repeat-one, returning the new state
    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&mut self) -> bool {
        self.inner.toggle_repeat()
    }

    /// Flip shuffle, returning the new state
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) -> bool {
        self.inner.toggle_shuffle()
    }

    // ===== Likes =====

    /// Toggle the current track's liked state; `None` if nothing is loaded
    #[wasm_bindgen(js_name = toggleLike)]
    pub fn toggle_like(&mut self) -> Option<bool> {
        let id = self.inner.current_track().map(|t| t.id.clone())?;
        Some(self.liked.toggle(&id))
    }

    /// Check whether a track id is liked
    #[wasm_bindgen(js_name = isLiked)]
    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked.is_liked(track_id)
    }

    // ===== Keyboard =====

    /// Route a keydown (`event.code`, `event.key`); `editing` is true while
    /// a text field has focus and swallows all shortcuts.
    ///
    /// Returns true if the key mapped to an action (the page should then
    /// `preventDefault()`).
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str, key: &str, editing: bool) -> bool {
        let gesture = Gesture::Key {
            key: Key::from_dom(code, key),
            editing,
        };

        match resolve(&gesture) {
            Some(action) => {
                dispatch(action, &mut self.inner, &mut self.liked);
                self.flush_events();
                true
            }
            None => false,
        }
    }

    // ===== Lifecycle notifications (wired to the element's events) =====

    /// Forward the element's `play`/`playing` event
    #[wasm_bindgen(js_name = notifyStarted)]
    pub fn notify_started(&mut self) {
        self.forward(MediaEvent::Started);
    }

    /// Forward the element's `pause` event
    #[wasm_bindgen(js_name = notifyPaused)]
    pub fn notify_paused(&mut self) {
        self.forward(MediaEvent::Paused);
    }

    /// Forward the element's `timeupdate` event
    #[wasm_bindgen(js_name = notifyTimeUpdate)]
    pub fn notify_time_update(&mut self) {
        let duration = self.audio.duration();
        self.forward(MediaEvent::PositionChanged {
            position_secs: self.audio.current_time(),
            duration_secs: (duration.is_finite() && duration > 0.0).then_some(duration),
        });
    }

    /// Forward the element's `ended` event
    #[wasm_bindgen(js_name = notifyEnded)]
    pub fn notify_ended(&mut self) {
        self.forward(MediaEvent::Ended);
    }

    // ===== State queries =====

    /// Current state snapshot as a JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Format seconds as `m:ss` for the progress display
    #[wasm_bindgen(js_name = formatTimestamp)]
    pub fn format_timestamp(secs: f64) -> String {
        cadence_core::time::format_timestamp(secs)
    }

    // ===== Event listeners =====

    /// Register a state-change callback `(phase: string) => void`
    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&mut self, callback: Function) {
        self.on_state_change = Some(callback);
    }

    /// Register a track-change callback `(index, trackId) => void`
    #[wasm_bindgen(js_name = onTrackChange)]
    pub fn on_track_change(&mut self, callback: Function) {
        self.on_track_change = Some(callback);
    }

    /// Register a position callback `(positionSecs, durationSecs|null) => void`
    #[wasm_bindgen(js_name = onPositionUpdate)]
    pub fn on_position_update(&mut self, callback: Function) {
        self.on_position_update = Some(callback);
    }

    /// Register a volume callback `(level) => void`
    #[wasm_bindgen(js_name = onVolumeChange)]
    pub fn on_volume_change(&mut self, callback: Function) {
        self.on_volume_change = Some(callback);
    }

    /// Register a queue-change callback `(length) => void`
    #[wasm_bindgen(js_name = onQueueChange)]
    pub fn on_queue_change(&mut self, callback: Function) {
        self.on_queue_change = Some(callback);
    }

    // ===== Internals =====

    /// Forward a lifecycle event if it still belongs to the current load.
    ///
    /// The element keeps firing for a superseded source for a tick after
    /// `src` is reassigned; comparing `currentSrc` against the expected
    /// media reference drops those, on top of the controller's own
    /// generation check.
    fn forward(&mut self, event: MediaEvent) {
        let current = self
            .inner
            .current_track()
            .is_some_and(|t| self.audio.current_src().ends_with(&t.media_url));
        if !current {
            return;
        }

        let generation = self.inner.generation();
        self.inner.handle_media_event(generation, event);
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.inner.take_events() {
            match event {
                PlayerEvent::StateChanged { phase } => {
                    if let Some(ref cb) = self.on_state_change {
                        let label = format!("{phase:?}").to_lowercase();
                        cb.call1(&JsValue::NULL, &JsValue::from_str(&label)).ok();
                    }
                }
                PlayerEvent::TrackChanged { index, track_id } => {
                    if let Some(ref cb) = self.on_track_change {
                        cb.call2(
                            &JsValue::NULL,
                            &JsValue::from_f64(index as f64),
                            &JsValue::from_str(&track_id),
                        )
                        .ok();
                    }
                }
                PlayerEvent::PositionUpdate {
                    position_secs,
                    duration_secs,
                } => {
                    if let Some(ref cb) = self.on_position_update {
                        let duration = duration_secs.map_or(JsValue::NULL, JsValue::from_f64);
                        cb.call2(&JsValue::NULL, &JsValue::from_f64(position_secs), &duration)
                            .ok();
                    }
                }
                PlayerEvent::VolumeChanged { level } => {
                    if let Some(ref cb) = self.on_volume_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_f64(level)).ok();
                    }
                }
                PlayerEvent::QueueChanged { length } => {
                    if let Some(ref cb) = self.on_queue_change {
                        cb.call1(&JsValue::NULL, &JsValue::from_f64(length as f64)).ok();
                    }
                }
            }
        }
    }
}
