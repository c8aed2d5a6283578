//! Liked-track preferences
//!
//! A durable set of liked track ids over a pluggable key-value backend.
//! The set is written synchronously on every toggle, before the new state
//! is reported back, so an abrupt termination never loses a toggle the UI
//! already reflected. An absent or malformed store loads as empty rather
//! than failing.

use crate::error::{PlayerError, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

/// Storage key under which the liked set is persisted
const LIKED_KEY: &str = "liked";

/// Persistent store collaborator
///
/// A minimal string key-value surface: `localStorage` in the browser, a
/// JSON file on native hosts, a plain map in tests.
pub trait PrefsBackend {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Durable set of liked track identifiers
pub struct LikedTracks {
    ids: HashSet<String>,
    backend: Box<dyn PrefsBackend>,
}

impl LikedTracks {
    /// Load the liked set from a backend
    ///
    /// Tolerates a missing or corrupt store by starting empty; likes keep
    /// working in memory even if persistence later fails.
    pub fn load(backend: Box<dyn PrefsBackend>) -> Self {
        let ids = match backend.read(LIKED_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(err) => {
                    warn!(%err, "malformed liked store, starting empty");
                    HashSet::new()
                }
            },
            None => HashSet::new(),
        };

        Self { ids, backend }
    }

    /// Check membership
    pub fn is_liked(&self, track_id: &str) -> bool {
        self.ids.contains(track_id)
    }

    /// Toggle membership, persisting before returning
    ///
    /// Returns the new membership state. A failed write is logged and the
    /// in-memory state kept, so the UI stays consistent within the session.
    pub fn toggle(&mut self, track_id: &str) -> bool {
        let now_liked = if self.ids.remove(track_id) {
            false
        } else {
            self.ids.insert(track_id.to_string());
            true
        };

        if let Err(err) = self.persist() {
            warn!(%err, "failed to persist liked set");
        }
        now_liked
    }

    /// Number of liked tracks
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no tracks are liked
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        // Sorted for a stable on-disk representation
        let mut list: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        list.sort_unstable();

        let raw = serde_json::to_string(&list)
            .map_err(|e| PlayerError::PrefsUnavailable(e.to_string()))?;
        self.backend.write(LIKED_KEY, &raw)
    }
}

/// In-memory backend for tests and ephemeral hosts
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a value
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut backend = Self::default();
        backend.entries.insert(key.to_string(), value.to_string());
        backend
    }
}

impl PrefsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backend for native hosts
///
/// Each key is stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PrefsBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
