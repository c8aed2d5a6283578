//! Cadence Player Core
//!
//! Shared domain types, collaborator traits, and error handling for
//! Cadence Player.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`]
//! - **Collaborator Traits**: [`TrackCatalog`]
//! - **Display Helpers**: [`time::format_timestamp`]
//! - **Error Handling**: unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::Track;
//!
//! let track = Track::new("intro", "Intro", "Some Artist", "/media/intro.mp3");
//! assert_eq!(track.title, "Intro");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{CoreError, Result};
pub use traits::TrackCatalog;
pub use types::Track;
