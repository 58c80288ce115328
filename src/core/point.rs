//! Einzelner Kontrollpunkt eines Trails mit Tangenten-Handles.

use super::frame::TrailFrame;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Welche Tangenten-Darstellung eines Punkts gültig ist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TangentMode {
    /// Eine Tangente für beide Richtungen (ausgehend +t, eingehend -t)
    #[default]
    Unified,
    /// Unabhängige linke (eingehende) und rechte (ausgehende) Tangente
    Split,
}

/// Sicht auf die aktive Tangenten-Darstellung eines Punkts.
///
/// Alle Vektoren sind relative Offsets zur Punktposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tangents {
    /// Symmetrische Tangente
    Unified(Vec3),
    /// Getrennte Tangenten
    Split { left: Vec3, right: Vec3 },
}

impl Tangents {
    /// Modus, der zu dieser Darstellung gehört
    pub fn mode(&self) -> TangentMode {
        match self {
            Tangents::Unified(_) => TangentMode::Unified,
            Tangents::Split { .. } => TangentMode::Split,
        }
    }

    /// Ausgehender Tangenten-Offset
    pub fn outgoing(&self) -> Vec3 {
        match *self {
            Tangents::Unified(tangent) => tangent,
            Tangents::Split { right, .. } => right,
        }
    }

    /// Eingehender Tangenten-Offset
    pub fn incoming(&self) -> Vec3 {
        match *self {
            Tangents::Unified(tangent) => -tangent,
            Tangents::Split { left, .. } => left,
        }
    }
}

/// Kontrollpunkt eines Trails.
///
/// Beide Tangenten-Darstellungen werden gespeichert; `mode` wählt die gültige aus.
/// Die inaktive Darstellung bleibt beim Umschalten erhalten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Anzeigename (ohne Einfluss auf das Sampling)
    #[serde(default)]
    pub name: Option<String>,
    /// Ankerposition des Punkts
    pub position: Vec3,
    /// Aktive Tangenten-Darstellung
    #[serde(default)]
    pub mode: TangentMode,
    /// Gemeinsame Tangente (nur bei `TangentMode::Unified` gültig)
    #[serde(default)]
    pub tangent: Vec3,
    /// Linke/eingehende Tangente (nur bei `TangentMode::Split` gültig)
    #[serde(default)]
    pub tangent_left: Vec3,
    /// Rechte/ausgehende Tangente (nur bei `TangentMode::Split` gültig)
    #[serde(default)]
    pub tangent_right: Vec3,
    /// Eindeutige ID innerhalb des besitzenden `TrailData`
    #[serde(default)]
    id: u64,
}

impl TrailPoint {
    /// Erstellt einen Punkt ohne Tangenten (Unified, alle Offsets null)
    pub fn new(position: Vec3) -> Self {
        Self {
            name: None,
            position,
            mode: TangentMode::Unified,
            tangent: Vec3::ZERO,
            tangent_left: Vec3::ZERO,
            tangent_right: Vec3::ZERO,
            id: 0,
        }
    }

    /// Builder: setzt den Anzeigenamen
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: setzt die Tangenten (und damit den Modus)
    pub fn with_tangents(mut self, tangents: Tangents) -> Self {
        self.set_tangents(tangents);
        self
    }

    /// ID des Punkts (wird ausschließlich von `TrailData` vergeben)
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Aktive Tangenten-Darstellung
    pub fn tangents(&self) -> Tangents {
        match self.mode {
            TangentMode::Unified => Tangents::Unified(self.tangent),
            TangentMode::Split => Tangents::Split {
                left: self.tangent_left,
                right: self.tangent_right,
            },
        }
    }

    /// Schreibt die übergebene Darstellung und schaltet den Modus passend um.
    /// Die jeweils andere Darstellung bleibt unverändert.
    pub fn set_tangents(&mut self, tangents: Tangents) {
        match tangents {
            Tangents::Unified(tangent) => self.tangent = tangent,
            Tangents::Split { left, right } => {
                self.tangent_left = left;
                self.tangent_right = right;
            }
        }
        self.mode = tangents.mode();
    }

    /// Absolute Position des ausgehenden Kontrollpunkts (Richtung nächster Punkt)
    pub fn outgoing_anchor(&self) -> Vec3 {
        self.position + self.tangents().outgoing()
    }

    /// Absolute Position des eingehenden Kontrollpunkts (Richtung vorheriger Punkt)
    pub fn incoming_anchor(&self) -> Vec3 {
        self.position + self.tangents().incoming()
    }

    /// Kopie im Eltern-Koordinatensystem (Position als Punkt, Tangenten als Richtungen).
    pub fn to_parent(&self, frame: &impl TrailFrame) -> Self {
        self.map_with(
            |p| frame.point_to_parent(p),
            |v| frame.vector_to_parent(v),
        )
    }

    /// Kopie im lokalen Koordinatensystem des Trails (Umkehrung von `to_parent`).
    pub fn to_local(&self, frame: &impl TrailFrame) -> Self {
        self.map_with(|p| frame.point_to_local(p), |v| frame.vector_to_local(v))
    }

    fn map_with(&self, point: impl Fn(Vec3) -> Vec3, vector: impl Fn(Vec3) -> Vec3) -> Self {
        Self {
            name: self.name.clone(),
            position: point(self.position),
            mode: self.mode,
            tangent: vector(self.tangent),
            tangent_left: vector(self.tangent_left),
            tangent_right: vector(self.tangent_right),
            id: self.id,
        }
    }
}

impl Default for TrailPoint {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
