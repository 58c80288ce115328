//! Application-Layer: Controller, State, Commands, Use-Cases und Agent.
//!
//! Headless: kein Rendering, nur Zustandsführung und Undo/Redo.

pub mod agent;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
/// Application State
///
/// Hält den editierten Trail, die Selektion, Optionen und die Undo-History.
pub mod state;
pub mod use_cases;

pub use agent::{look_rotation, AgentPose, TrailAgent};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::AppCommand;
pub use state::{AppState, SelectionState};
