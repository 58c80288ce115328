//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases::{point_selection, trail_editing, undo_redo};
use super::{AppCommand, AppState};

/// Führt Commands auf dem `AppState` aus.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen mutierenden Command aus und protokolliert ihn.
    ///
    /// Bei einem Fehler bleibt der Zustand unverändert (kein Undo-Snapshot).
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Punkte ===
            AppCommand::AddPoint => trail_editing::add_point(state)?,
            AppCommand::DuplicatePoint { index } => trail_editing::duplicate_point(state, index)?,
            AppCommand::RemoveSelectedPoint => trail_editing::remove_selected_point(state)?,
            AppCommand::RemovePoint { id } => trail_editing::remove_point(state, id)?,
            AppCommand::MovePoint { index, position } => {
                trail_editing::move_point(state, index, position)?
            }
            AppCommand::SetTangents { index, tangents } => {
                trail_editing::set_tangents(state, index, tangents)?
            }
            AppCommand::SetTangentMode { index, mode } => {
                trail_editing::set_tangent_mode(state, index, mode)?
            }
            AppCommand::RenamePoint { index, name } => {
                trail_editing::rename_point(state, index, name)?
            }

            // === Selektion ===
            AppCommand::SelectPoint { index } => point_selection::select_point(state, index)?,
            AppCommand::ClearSelection => point_selection::clear_selection(state),

            // === History ===
            AppCommand::Undo => undo_redo::undo(state),
            AppCommand::Redo => undo_redo::redo(state),
        }

        Ok(())
    }
}
