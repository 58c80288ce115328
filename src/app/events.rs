//! Mutierende Commands für den headless Trail-Editor.

use crate::core::{TangentMode, Tangents};
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral über den Controller laufen.
///
/// Indizes beziehen sich auf die aktuelle Trail-Reihenfolge, IDs auf `TrailPoint::id()`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt hinzufügen: leerer Trail → neuer Punkt am Ursprung,
    /// sonst Duplikat des selektierten (oder letzten) Punkts
    AddPoint,
    /// Punkt an `index` duplizieren (Kopie direkt dahinter)
    DuplicatePoint { index: usize },
    /// Selektierten Punkt entfernen
    RemoveSelectedPoint,
    /// Punkt mit `id` entfernen
    RemovePoint { id: u64 },
    /// Punkt an `index` selektieren
    SelectPoint { index: usize },
    /// Selektion aufheben
    ClearSelection,
    /// Ankerposition setzen (lokaler Trail-Raum)
    MovePoint { index: usize, position: Vec3 },
    /// Tangenten setzen (schaltet den Modus passend um)
    SetTangents { index: usize, tangents: Tangents },
    /// Nur den Tangenten-Modus umschalten (inaktive Werte bleiben erhalten)
    SetTangentMode { index: usize, mode: TangentMode },
    /// Anzeigenamen setzen oder entfernen
    RenamePoint { index: usize, name: Option<String> },
    /// Letzte Änderung rückgängig machen
    Undo,
    /// Rückgängig gemachte Änderung wiederholen
    Redo,
}
