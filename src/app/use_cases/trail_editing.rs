//! Use-Case: Trail-Punkte hinzufügen, entfernen und bearbeiten.
//!
//! Jede erfolgreiche Mutation nimmt vorher genau einen Undo-Snapshot auf.
//! Ungültige Indizes/IDs führen zu einem Fehler ohne Snapshot.

use super::point_selection;
use crate::app::AppState;
use crate::core::{TangentMode, Tangents, TrailError, TrailPoint};
use anyhow::Context;
use glam::Vec3;
use std::sync::Arc;

/// Name für den ersten Punkt eines leeren Trails
pub const DEFAULT_POINT_NAME: &str = "Point";

/// Fügt einen Punkt hinzu und selektiert ihn.
///
/// Leerer Trail: neuer Punkt am Ursprung. Sonst wird der selektierte Punkt
/// (ohne Selektion der letzte) dupliziert und die Kopie direkt dahinter eingefügt.
pub fn add_point(state: &mut AppState) -> anyhow::Result<()> {
    let source = match state.trail.len() {
        0 => None,
        len => Some(
            state
                .selection
                .selected_index
                .map_or(len - 1, |index| index.min(len - 1)),
        ),
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let trail = Arc::make_mut(&mut state.trail);
    let (index, id) = match source {
        None => {
            let point = trail.append(TrailPoint::new(Vec3::ZERO).with_name(DEFAULT_POINT_NAME));
            (0, point.id())
        }
        Some(source) => (source + 1, trail.duplicate_after(source)?.id()),
    };
    state.selection.selected_index = Some(index);

    log::info!("Punkt {} an Index {} hinzugefügt", id, index);
    Ok(())
}

/// Dupliziert den Punkt an `index` und selektiert die Kopie.
pub fn duplicate_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    state
        .trail
        .get(index)
        .with_context(|| format!("Punkt {} nicht duplizierbar", index))?;

    state.record_undo_snapshot();

    let id = Arc::make_mut(&mut state.trail).duplicate_after(index)?.id();
    state.selection.selected_index = Some(index + 1);

    log::info!("Punkt {} dupliziert → {}", index, id);
    Ok(())
}

/// Entfernt den Punkt mit `id`.
pub fn remove_point(state: &mut AppState, id: u64) -> anyhow::Result<()> {
    let index = state
        .trail
        .index_of(id)
        .ok_or(TrailError::NotFound(id))
        .context("Punkt nicht entfernbar")?;

    state.record_undo_snapshot();

    Arc::make_mut(&mut state.trail).remove_by_id(id)?;
    point_selection::after_removal(state, index);

    log::info!("Punkt {} (Index {}) entfernt", id, index);
    Ok(())
}

/// Entfernt den selektierten Punkt; ohne Selektion passiert nichts.
pub fn remove_selected_point(state: &mut AppState) -> anyhow::Result<()> {
    let Some(index) = state.selection.selected_index else {
        log::debug!("Kein Punkt selektiert, nichts zu entfernen");
        return Ok(());
    };
    let id = state
        .trail
        .get(index)
        .context("Selektierter Punkt existiert nicht")?
        .id();
    remove_point(state, id)
}

/// Setzt die Ankerposition des Punkts an `index`.
pub fn move_point(state: &mut AppState, index: usize, position: Vec3) -> anyhow::Result<()> {
    edit_point(state, index, |point| point.position = position)?;
    log::info!("Punkt {} verschoben nach {:?}", index, position);
    Ok(())
}

/// Setzt die Tangenten des Punkts an `index` (Modus folgt der Darstellung).
pub fn set_tangents(state: &mut AppState, index: usize, tangents: Tangents) -> anyhow::Result<()> {
    edit_point(state, index, |point| point.set_tangents(tangents))?;
    log::info!("Tangenten von Punkt {} gesetzt: {:?}", index, tangents);
    Ok(())
}

/// Schaltet nur den Tangenten-Modus um.
pub fn set_tangent_mode(
    state: &mut AppState,
    index: usize,
    mode: TangentMode,
) -> anyhow::Result<()> {
    edit_point(state, index, |point| point.mode = mode)?;
    log::info!("Tangenten-Modus von Punkt {}: {:?}", index, mode);
    Ok(())
}

/// Setzt oder entfernt den Anzeigenamen.
pub fn rename_point(
    state: &mut AppState,
    index: usize,
    name: Option<String>,
) -> anyhow::Result<()> {
    edit_point(state, index, |point| point.name = name)?;
    log::info!(
        "Punkt {} umbenannt: {:?}",
        index,
        state.trail.get(index)?.name
    );
    Ok(())
}

fn edit_point(
    state: &mut AppState,
    index: usize,
    edit: impl FnOnce(&mut TrailPoint),
) -> anyhow::Result<()> {
    state
        .trail
        .get(index)
        .with_context(|| format!("Punkt {} nicht editierbar", index))?;

    state.record_undo_snapshot();

    Arc::make_mut(&mut state.trail).modify(index, edit)?;
    Ok(())
}
