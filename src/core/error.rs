//! Fehlertypen des Trail-Kerns.

use thiserror::Error;

/// Vorbedingungs-Verletzungen bei Zugriffen auf `TrailData` und beim Sampling.
///
/// Alle Varianten sind lokal und vom Aufrufer behandelbar; der Kern loggt nicht
/// und versucht nichts erneut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrailError {
    /// Index liegt außerhalb von `[0, len)`
    #[error("Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Kein Punkt mit dieser ID vorhanden
    #[error("Kein Punkt mit ID {0} vorhanden")]
    NotFound(u64),

    /// Zugriff auf einen leeren Trail (`last`, Sampling)
    #[error("Trail enthält keine Punkte")]
    EmptyCollection,

    /// Doppelte ID beim Wiederherstellen aus bestehenden Punkten
    #[error("Doppelte Punkt-ID {0}")]
    DuplicateId(u64),
}

/// Ergebnis-Typ für alle Kern-Operationen.
pub type TrailResult<T> = Result<T, TrailError>;
