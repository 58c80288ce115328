//! Application State: zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{TrailData, TrailPoint};
use crate::shared::TrailOptions;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index des selektierten Punkts (None = keine Selektion)
    pub selected_index: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }
}

/// Hauptzustand des Editors
pub struct AppState {
    /// Editierter Trail (Arc für O(1)-Snapshots, Mutation über `Arc::make_mut`)
    pub trail: Arc<TrailData>,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: TrailOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(TrailOptions::default())
    }

    /// Erstellt einen leeren App-State; die History-Tiefe kommt aus den Optionen.
    pub fn with_options(options: TrailOptions) -> Self {
        Self {
            trail: Arc::new(TrailData::new()),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Ersetzt den Trail (z.B. nach dem Laden); Selektion und History werden zurückgesetzt.
    pub fn load_trail(&mut self, trail: TrailData) {
        self.trail = Arc::new(trail);
        self.selection = SelectionState::new();
        self.history = EditHistory::new_with_capacity(self.options.history_depth);
    }

    /// Aktuell selektierter Punkt
    pub fn selected_point(&self) -> Option<&TrailPoint> {
        self.selection
            .selected_index
            .and_then(|index| self.trail.get(index).ok())
    }

    /// Anzahl der Punkte (für Anzeige)
    pub fn point_count(&self) -> usize {
        self.trail.len()
    }

    /// Gibt `true` zurück, wenn Undo möglich ist
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt `true` zurück, wenn Redo möglich ist
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Nimmt einen Undo-Snapshot des aktuellen Zustands auf (vor jeder Mutation).
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
