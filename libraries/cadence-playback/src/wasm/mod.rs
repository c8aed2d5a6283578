//! WASM bindings for cadence-playback
//!
//! Binds the player controller to a real browser `<audio>` element and
//! `localStorage`, exposing a JavaScript-friendly API. The page wires the
//! element's lifecycle events to the `notify*` entry points and registers
//! callbacks for display updates.

pub mod media;
pub mod player;

pub use media::{DomMedia, LocalStorageBackend};
pub use player::WasmPlayer;
