//! Waypoint-Trail Library.
//! Bézier-Trails aus editierbaren Kontrollpunkten, Faktor-Sampling und ein
//! headless Editing-Layer mit Undo/Redo.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AgentPose, AppCommand, AppController, AppState, TrailAgent};
pub use crate::core::{
    sample_position, sample_position_in, AffineFrame, IdentityFrame, TangentMode, Tangents,
    TrailData, TrailError, TrailFrame, TrailPoint,
};
pub use shared::TrailOptions;
