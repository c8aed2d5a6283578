/// Collaborator traits for Cadence Player
use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Track catalog collaborator
///
/// A one-shot provider of the full ordered track list, fetched at startup.
/// The player treats this as an opaque asynchronous source; a failed fetch
/// leaves the queue empty rather than surfacing an error to the user.
#[async_trait(?Send)]
pub trait TrackCatalog {
    /// Load the complete ordered track list
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be reached or parsed
    async fn load_tracks(&self) -> Result<Vec<Track>>;
}

/// Static catalog backed by an in-memory track list
///
/// Useful for tests and hosts that obtain the list out of band.
pub struct StaticCatalog {
    tracks: Vec<Track>,
}

impl StaticCatalog {
    /// Create a catalog from a fixed track list
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

#[async_trait(?Send)]
impl TrackCatalog for StaticCatalog {
    async fn load_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.tracks.clone())
    }
}
