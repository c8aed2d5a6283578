/// Track domain type
use serde::{Deserialize, Serialize};

/// A playable track as delivered by the catalog collaborator.
///
/// Immutable once placed in the queue. The serde field names match the
/// catalog's JSON wire shape (`cover`, `url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique, stable track identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Display artist
    pub artist: String,

    /// Cover image reference (optional)
    #[serde(rename = "cover", default)]
    pub cover_url: Option<String>,

    /// Playable media reference
    #[serde(rename = "url")]
    pub media_url: String,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        media_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_url: None,
            media_url: media_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_wire_shape() {
        let json = r#"{
            "id": "t1",
            "title": "First",
            "artist": "Someone",
            "cover": "/covers/t1.jpg",
            "url": "/media/t1.mp3"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, "t1");
        assert_eq!(track.cover_url.as_deref(), Some("/covers/t1.jpg"));
        assert_eq!(track.media_url, "/media/t1.mp3");
    }

    #[test]
    fn cover_is_optional_on_the_wire() {
        let json = r#"{"id":"t2","title":"Second","artist":"A","url":"/media/t2.mp3"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.cover_url.is_none());
    }
}
