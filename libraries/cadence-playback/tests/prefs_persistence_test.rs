//! Durability tests for the liked-track store

use cadence_playback::{FileBackend, LikedTracks};
use std::fs;

#[test]
fn toggle_survives_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backend = FileBackend::new(dir.path()).unwrap();
        let mut liked = LikedTracks::load(Box::new(backend));
        assert!(liked.toggle("t1"));
        assert!(liked.toggle("t2"));
        assert!(!liked.toggle("t2")); // un-liked again
    }

    // "Restart": a fresh store over the same directory
    let backend = FileBackend::new(dir.path()).unwrap();
    let liked = LikedTracks::load(Box::new(backend));

    assert!(liked.is_liked("t1"));
    assert!(!liked.is_liked("t2"));
    assert_eq!(liked.len(), 1);
}

#[test]
fn write_happens_before_toggle_returns() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path()).unwrap();
    let mut liked = LikedTracks::load(Box::new(backend));

    liked.toggle("t1");

    // The file already reflects the toggle, with no explicit flush/close
    let raw = fs::read_to_string(dir.path().join("liked.json")).unwrap();
    assert_eq!(raw, r#"["t1"]"#);
}

#[test]
fn corrupt_store_loads_empty_and_recovers_on_next_toggle() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("liked.json"), "{not valid json").unwrap();

    let backend = FileBackend::new(dir.path()).unwrap();
    let mut liked = LikedTracks::load(Box::new(backend));
    assert!(liked.is_empty());

    // First toggle rewrites a valid store
    liked.toggle("t1");
    let raw = fs::read_to_string(dir.path().join("liked.json")).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec!["t1".to_string()]);
}

#[test]
fn absent_store_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path().join("nested").join("prefs")).unwrap();
    let liked = LikedTracks::load(Box::new(backend));
    assert!(liked.is_empty());
}
