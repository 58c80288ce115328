//! Reine Geometrie-Funktionen für Bézier-Kurven im 3D-Raum.
//!
//! Layer-neutral: kennt weder `TrailPoint` noch `TrailData` und kann von `core`
//! und `app` gleichermaßen genutzt werden.

use glam::Vec3;

/// B(t) = (1-t)²·P0 + 2(1-t)t·T + t²·P1
///
/// `t` wird nicht geklemmt; Werte außerhalb von [0, 1] extrapolieren.
pub fn quadratic_bezier(p0: Vec3, tangent: Vec3, p1: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * tangent + t * t * p1
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·T0 + 3(1-t)t²·T1 + t³·P1
///
/// `t` wird nicht geklemmt; Werte außerhalb von [0, 1] extrapolieren.
pub fn cubic_bezier(p0: Vec3, t0: Vec3, t1: Vec3, p1: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * t0 + 3.0 * inv * t2 * t1 + t2 * t * p1
}

/// Summierte Länge einer Folge von Liniensegmenten.
pub fn lines_length(lines: impl IntoIterator<Item = (Vec3, Vec3)>) -> f32 {
    lines.into_iter().map(|(a, b)| a.distance(b)).sum()
}
