//! Faktor-Sampling: normierter Fortschritt [0, 1] → Position auf dem Trail.
//!
//! Zustandslos und allokationsfrei; gedacht für den Aufruf in jedem Frame.

use super::curve::{knot_bezier, CurveKnot};
use super::frame::{IdentityFrame, TrailFrame};
use super::{TrailData, TrailError, TrailResult};
use glam::Vec3;

/// Faltet einen beliebigen Faktor periodisch auf [0, 1].
///
/// Bei `|factor| > 1` wird der ganzzahlige Anteil abgezogen, negative Reste werden
/// um 1 verschoben. Exakt `1.0` bleibt `1.0` (Endpunkt, siehe `normalize_index`).
pub fn normalize_factor(factor: f32) -> f32 {
    let factor = if factor.abs() > 1.0 {
        factor - factor.floor()
    } else {
        factor
    };
    if factor < 0.0 {
        factor + 1.0
    } else {
        factor
    }
}

/// Behandelt den Index hinter dem letzten Punkt.
///
/// Geschlossene Trails springen auf Punkt 0 zurück, offene bleiben am letzten Punkt.
pub fn normalize_index(index: usize, len: usize, looped: bool) -> usize {
    if index < len {
        index
    } else if looped {
        0
    } else {
        len.saturating_sub(1)
    }
}

/// Segment-Index und lokaler Parameter für einen bereits normierten Faktor.
///
/// Liefert `(i0, i1, t)`; bei offenen Trails mit einem Punkt `None` (kein Segment).
pub fn resolve_segment(factor: f32, len: usize, looped: bool) -> Option<(usize, usize, f32)> {
    let segment_count = if looped { len } else { len.saturating_sub(1) };
    if segment_count == 0 {
        return None;
    }

    let raw = factor * segment_count as f32;
    let i0 = normalize_index(raw.floor() as usize, len, looped);
    let i1 = normalize_index(i0 + 1, len, looped);
    Some((i0, i1, raw % 1.0))
}

/// Position auf dem Trail im lokalen Raum des Trails.
pub fn sample_position(data: &TrailData, factor: f32, looped: bool) -> TrailResult<Vec3> {
    sample_position_in(data, factor, looped, &IdentityFrame)
}

/// Position auf dem Trail im Eltern-Frame.
///
/// Punkte und Tangenten werden vor der Interpolation abgebildet. Ein leerer Trail
/// ergibt `TrailError::EmptyCollection`; der Aufrufer entscheidet über einen Fallback.
pub fn sample_position_in(
    data: &TrailData,
    factor: f32,
    looped: bool,
    frame: &impl TrailFrame,
) -> TrailResult<Vec3> {
    let points = data.points();
    let first = points.first().ok_or(TrailError::EmptyCollection)?;

    let Some((i0, i1, t)) = resolve_segment(normalize_factor(factor), points.len(), looped)
    else {
        return Ok(frame.point_to_parent(first.position));
    };

    let a = CurveKnot::from_point(&points[i0], frame);
    let b = CurveKnot::from_point(&points[i1], frame);
    Ok(knot_bezier(&a, &b, t))
}
