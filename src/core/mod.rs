//! Core-Domänentypen: Trail-Punkte, TrailData, Segment-Geometrie und Faktor-Sampling.

pub mod curve;
mod error;
pub mod frame;
/// Kontrollpunkte mit Tangenten-Handles
pub mod point;
pub mod sampler;
pub mod trail_data;

pub use curve::{
    draw_segment, segment_lines, trail_length, trail_lines, CurveKnot, SegmentLines,
};
pub use error::{TrailError, TrailResult};
pub use frame::{AffineFrame, IdentityFrame, TrailFrame};
pub use point::{TangentMode, Tangents, TrailPoint};
pub use sampler::{normalize_factor, normalize_index, sample_position, sample_position_in};
pub use trail_data::TrailData;
