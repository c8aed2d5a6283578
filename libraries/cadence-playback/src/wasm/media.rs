//! Browser-backed playback primitive and preference store

use crate::controller::MediaElement;
use crate::error::{PlayerError, Result};
use crate::prefs::PrefsBackend;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, Storage};

/// [`MediaElement`] over a DOM `<audio>` element
pub struct DomMedia {
    el: HtmlAudioElement,
    /// Keeps the rejection handler alive across play() promises
    swallow_rejection: Closure<dyn FnMut(JsValue)>,
}

impl DomMedia {
    /// Wrap an audio element
    pub fn new(el: HtmlAudioElement) -> Self {
        Self {
            el,
            swallow_rejection: Closure::new(|_err: JsValue| {
                // Autoplay rejection; resolved by the next user gesture
            }),
        }
    }
}

impl MediaElement for DomMedia {
    fn set_source(&mut self, url: &str) {
        self.el.set_src(url);
    }

    fn play(&mut self) -> Result<()> {
        match self.el.play() {
            Ok(promise) => {
                // The async rejection path must be handled or the browser
                // reports an unhandled promise rejection.
                let _ = promise.catch(&self.swallow_rejection);
                Ok(())
            }
            Err(err) => Err(PlayerError::PlaybackRejected(format!("{err:?}"))),
        }
    }

    fn pause(&mut self) {
        let _ = self.el.pause();
    }

    fn set_position(&mut self, seconds: f64) {
        self.el.set_current_time(seconds);
    }

    fn set_volume(&mut self, level: f64) {
        self.el.set_volume(level);
    }

    fn duration(&self) -> Option<f64> {
        let d = self.el.duration();
        (d.is_finite() && d > 0.0).then_some(d)
    }
}

/// [`PrefsBackend`] over `window.localStorage`
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// Acquire the window's local storage, if available
    ///
    /// Returns `None` in contexts without storage (sandboxed iframes,
    /// disabled cookies); callers fall back to an in-memory backend.
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl PrefsBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| PlayerError::PrefsUnavailable(format!("{err:?}")))
    }
}
