//! Domain types for Cadence Player

mod track;

pub use track::Track;
