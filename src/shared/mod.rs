//! Geteilte, layer-neutrale Bausteine: reine Kurven-Geometrie und Optionen.

pub mod curve_geometry;
pub mod options;

pub use options::TrailOptions;
pub use options::{AGENT_SPEED_DIVISOR, TRAIL_DETAIL_LEVEL};
