//! Use-Case: Selektion eines einzelnen Punkts.

use crate::app::AppState;
use anyhow::Context;

/// Selektiert den Punkt an `index`; ungültige Indizes lassen die Selektion unverändert.
pub fn select_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    state
        .trail
        .get(index)
        .with_context(|| format!("Punkt {} nicht selektierbar", index))?;
    state.selection.selected_index = Some(index);
    log::debug!("Punkt {} selektiert", index);
    Ok(())
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_index.take().is_some() {
        log::debug!("Selektion aufgehoben");
    }
}

/// Passt die Selektion nach dem Entfernen des Punkts an `removed` an.
///
/// Ein dahinter liegender selektierter Punkt bleibt selektiert (Index rückt nach);
/// war der entfernte Punkt selektiert, wird auf den neuen letzten Index geklemmt.
pub(crate) fn after_removal(state: &mut AppState, removed: usize) {
    let len = state.trail.len();
    state.selection.selected_index = match state.selection.selected_index {
        _ if len == 0 => None,
        Some(selected) if selected > removed => Some(selected - 1),
        Some(selected) => Some(selected.min(len - 1)),
        None => None,
    };
}
