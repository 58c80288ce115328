//! Segment-Geometrie zwischen zwei Trail-Punkten und Polylinie über den ganzen Trail.
//!
//! Die Linien werden lazy als Iterator von `(start, end)`-Paaren geliefert; der
//! Konsument entscheidet, ob er zeichnet, sammelt oder misst.

use super::frame::{IdentityFrame, TrailFrame};
use super::{TrailData, TrailPoint};
use crate::shared::curve_geometry::{cubic_bezier, lines_length};
use glam::Vec3;

/// Ein Punkt reduziert auf die für Bézier-Segmente relevanten absoluten Positionen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveKnot {
    /// Ankerposition
    pub position: Vec3,
    /// Ausgehender Kontrollpunkt (absolut)
    pub outgoing: Vec3,
    /// Eingehender Kontrollpunkt (absolut)
    pub incoming: Vec3,
}

impl CurveKnot {
    /// Leitet die Kontrollpunkte aus dem Tangenten-Modus ab und bildet sie in den Frame ab.
    pub fn from_point(point: &TrailPoint, frame: &impl TrailFrame) -> Self {
        let tangents = point.tangents();
        let position = frame.point_to_parent(point.position);
        Self {
            position,
            outgoing: position + frame.vector_to_parent(tangents.outgoing()),
            incoming: position + frame.vector_to_parent(tangents.incoming()),
        }
    }
}

/// Kubische Bézier-Position zwischen zwei Knoten bei `t`.
pub fn knot_bezier(a: &CurveKnot, b: &CurveKnot, t: f32) -> Vec3 {
    cubic_bezier(a.position, a.outgoing, b.incoming, b.position, t)
}

/// Iterator über die Liniensegmente eines Bézier-Segments.
#[derive(Debug, Clone)]
pub struct SegmentLines {
    a: CurveKnot,
    b: CurveKnot,
    resolution: u32,
    step: u32,
    last: Vec3,
    straight: bool,
}

impl SegmentLines {
    fn new(a: CurveKnot, b: CurveKnot, resolution: u32) -> Self {
        // Exakter Vergleich: nur echte Null-Tangenten ergeben eine Gerade
        let straight = (a.outgoing == a.position && b.incoming == b.position) || resolution == 0;
        Self {
            a,
            b,
            resolution: if straight { 1 } else { resolution },
            step: 0,
            last: a.position,
            straight,
        }
    }
}

impl Iterator for SegmentLines {
    type Item = (Vec3, Vec3);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.resolution {
            return None;
        }
        self.step += 1;

        let next = if self.straight {
            self.b.position
        } else {
            knot_bezier(&self.a, &self.b, self.step as f32 / self.resolution as f32)
        };
        let line = (self.last, next);
        self.last = next;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.resolution - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentLines {}

/// Liniensegmente von `a` nach `b` mit `resolution` Zwischenschritten.
///
/// Ohne Tangenten (oder mit `resolution == 0`) entsteht genau eine Gerade.
pub fn segment_lines(a: &TrailPoint, b: &TrailPoint, resolution: u32) -> SegmentLines {
    knot_lines(
        CurveKnot::from_point(a, &IdentityFrame),
        CurveKnot::from_point(b, &IdentityFrame),
        resolution,
    )
}

/// Wie `segment_lines`, aber auf bereits abgebildeten Knoten.
pub fn knot_lines(a: CurveKnot, b: CurveKnot, resolution: u32) -> SegmentLines {
    SegmentLines::new(a, b, resolution)
}

/// Callback-Variante von `segment_lines`: `emit(start, end)` pro Linie, in Reihenfolge.
pub fn draw_segment(
    a: &TrailPoint,
    b: &TrailPoint,
    resolution: u32,
    mut emit: impl FnMut(Vec3, Vec3),
) {
    for (start, end) in segment_lines(a, b, resolution) {
        emit(start, end);
    }
}

/// Polylinie des gesamten Trails im Eltern-Frame.
///
/// Segmente laufen von Punkt i nach i+1; bei `complete_trail` folgt zuletzt das
/// Schluss-Segment vom letzten zum ersten Punkt. `detail == 0` liefert nichts.
pub fn trail_lines<'a, F: TrailFrame>(
    data: &'a TrailData,
    complete_trail: bool,
    detail: u32,
    frame: &'a F,
) -> impl Iterator<Item = (Vec3, Vec3)> + 'a {
    let points = data.points();
    let len = points.len();
    let segment_count = match (detail, complete_trail) {
        (0, _) => 0,
        (_, true) => len,
        (_, false) => len.saturating_sub(1),
    };

    (0..segment_count).flat_map(move |i| {
        let a = CurveKnot::from_point(&points[i], frame);
        let b = CurveKnot::from_point(&points[(i + 1) % len], frame);
        knot_lines(a, b, detail)
    })
}

/// Approximierte Trail-Länge über die Polylinie aus `trail_lines`.
pub fn trail_length(
    data: &TrailData,
    complete_trail: bool,
    detail: u32,
    frame: &impl TrailFrame,
) -> f32 {
    lines_length(trail_lines(data, complete_trail, detail, frame))
}
