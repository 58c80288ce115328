use super::SelectionState;
use crate::core::TrailData;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Arc-Clone (Copy-on-Write): der Deep-Clone passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Trail zum Zeitpunkt des Snapshots
    pub trail: Arc<TrailData>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            trail: Arc::clone(&state.trail),
            selection: state.selection,
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.trail = self.trail;
        state.selection = self.selection;
    }
}

/// Undo/Redo-Manager mit begrenzter Tiefe.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    /// Bei Tiefe 0 wird nichts gespeichert.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        self.redo_stack.clear();
        Self::push_bounded(&mut self.undo_stack, snap, self.max_depth);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        Self::push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        Self::push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, max_depth: usize) {
        if max_depth == 0 {
            return;
        }
        if stack.len() >= max_depth {
            stack.remove(0);
        }
        stack.push(snap);
    }
}
