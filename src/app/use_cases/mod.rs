//! Use-Case-Funktionen: mutierende Operationen auf dem `AppState`.
//!
//! Aufgeteilt nach Bereich:
//! - `trail_editing`: Punkte hinzufügen, entfernen und bearbeiten
//! - `point_selection`: Selektion setzen und aufheben
//! - `undo_redo`: Snapshot-basierte History

pub mod point_selection;
pub mod trail_editing;
pub mod undo_redo;
