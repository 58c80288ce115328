//! Die zentrale TrailData-Struktur: geordnete Punktliste mit stabilen IDs.

use super::{TrailError, TrailPoint, TrailResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Geordnete Kontrollpunkte eines Trails.
///
/// Die Reihenfolge definiert die Topologie (Segment i verbindet Punkt i mit i+1).
/// IDs werden aus einem monoton steigenden Zähler vergeben und nie wiederverwendet,
/// auch nicht nach dem Entfernen eines Punkts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrailDataRepr")]
pub struct TrailData {
    points: Vec<TrailPoint>,
    next_id: u64,
}

/// Serialisierte Form; beim Laden wird die ID-Invariante neu aufgebaut.
#[derive(Deserialize)]
struct TrailDataRepr {
    #[serde(default)]
    points: Vec<TrailPoint>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<TrailDataRepr> for TrailData {
    type Error = TrailError;

    fn try_from(repr: TrailDataRepr) -> TrailResult<Self> {
        let mut data = TrailData::from_points(repr.points)?;
        // Gespeicherter Zähler kann höher sein (entfernte IDs am Ende)
        data.next_id = data.next_id.max(repr.next_id);
        Ok(data)
    }
}

impl TrailData {
    /// Erstellt einen leeren Trail
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            next_id: 0,
        }
    }

    /// Baut einen Trail aus bestehenden Punkten (IDs bleiben erhalten).
    ///
    /// Der Zähler startet bei `max(id) + 1`. Doppelte IDs werden abgelehnt.
    pub fn from_points(points: Vec<TrailPoint>) -> TrailResult<Self> {
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.id()) {
                return Err(TrailError::DuplicateId(point.id()));
            }
        }
        let next_id = points.iter().map(TrailPoint::id).max().map_or(0, |max| max + 1);
        Ok(Self { points, next_id })
    }

    /// Hängt einen Punkt an und vergibt eine neue ID
    pub fn append(&mut self, point: TrailPoint) -> &TrailPoint {
        self.insert_with_new_id(self.points.len(), point)
    }

    /// Kopiert den Punkt an `index` und fügt die Kopie direkt dahinter ein.
    ///
    /// Alle Felder außer der ID werden übernommen; spätere Punkte rücken eine Position auf.
    pub fn duplicate_after(&mut self, index: usize) -> TrailResult<&TrailPoint> {
        let copy = self.get(index)?.clone();
        Ok(self.insert_with_new_id(index + 1, copy))
    }

    /// Entfernt genau den Punkt mit passender ID (exaktes Match, kein Index-Rückschluss)
    pub fn remove_by_id(&mut self, id: u64) -> TrailResult<TrailPoint> {
        let index = self.index_of(id).ok_or(TrailError::NotFound(id))?;
        Ok(self.points.remove(index))
    }

    /// Entfernt den Punkt an `index`; spätere Punkte rücken eine Position nach vorne
    pub fn remove_at(&mut self, index: usize) -> TrailResult<TrailPoint> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    /// Punkt an `index`
    pub fn get(&self, index: usize) -> TrailResult<&TrailPoint> {
        let len = self.points.len();
        self.points
            .get(index)
            .ok_or(TrailError::IndexOutOfRange { index, len })
    }

    /// Verändert den Punkt an `index` in-place.
    ///
    /// Die ID des Slots wird nach der Änderung wiederhergestellt, auch wenn die
    /// Closure den ganzen Punkt ersetzt.
    pub fn modify<R>(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut TrailPoint) -> R,
    ) -> TrailResult<R> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(TrailError::IndexOutOfRange { index, len })?;
        let id = slot.id();
        let result = edit(slot);
        slot.set_id(id);
        Ok(result)
    }

    /// Ersetzt den Inhalt an `index`; der Slot behält seine bisherige ID.
    pub fn set(&mut self, index: usize, point: TrailPoint) -> TrailResult<()> {
        self.modify(index, |slot| *slot = point)
    }

    /// Letzter Punkt
    pub fn last(&self) -> TrailResult<&TrailPoint> {
        self.points.last().ok_or(TrailError::EmptyCollection)
    }

    /// Anzahl der Punkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Punkte in Trail-Reihenfolge
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Iterator über alle Punkte in Trail-Reihenfolge
    pub fn iter(&self) -> std::slice::Iter<'_, TrailPoint> {
        self.points.iter()
    }

    /// Aktuelle Position des Punkts mit `id`
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.points.iter().position(|p| p.id() == id)
    }

    /// Punkt mit `id`
    pub fn find(&self, id: u64) -> Option<&TrailPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Nächste zu vergebende ID
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Vergibt eine neue ID und fügt an `index <= len` ein; liefert den eingefügten Punkt.
    fn insert_with_new_id(&mut self, index: usize, mut point: TrailPoint) -> &TrailPoint {
        point.set_id(self.next_id);
        self.next_id += 1;
        self.points.insert(index, point);
        &self.points[index]
    }

    fn check_index(&self, index: usize) -> TrailResult<()> {
        let len = self.points.len();
        if index < len {
            Ok(())
        } else {
            Err(TrailError::IndexOutOfRange { index, len })
        }
    }
}

impl<'a> IntoIterator for &'a TrailData {
    type Item = &'a TrailPoint;
    type IntoIter = std::slice::Iter<'a, TrailPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests;
