use super::*;
use crate::core::{TangentMode, Tangents};
use glam::Vec3;
use std::collections::HashSet;

/// Trail mit `count` Punkten entlang der X-Achse (x = 0, 1, 2, ...).
fn trail_with_points(count: usize) -> TrailData {
    let mut data = TrailData::new();
    for i in 0..count {
        data.append(TrailPoint::new(Vec3::new(i as f32, 0.0, 0.0)));
    }
    data
}

fn ids(data: &TrailData) -> Vec<u64> {
    data.iter().map(TrailPoint::id).collect()
}

#[test]
fn test_append_assigns_increasing_ids() {
    let data = trail_with_points(3);

    assert_eq!(data.len(), 3);
    assert_eq!(ids(&data), vec![0, 1, 2]);
    assert_eq!(data.next_id(), 3);
}

#[test]
fn test_append_overrides_caller_id() {
    let mut data = trail_with_points(1);
    let mut point = TrailPoint::new(Vec3::ONE);
    point.set_id(0);

    let appended = data.append(point);
    assert_eq!(appended.id(), 1);
}

#[test]
fn test_duplicate_inserts_copy_after_index() {
    let mut data = trail_with_points(3);
    data.modify(1, |p| {
        p.name = Some("Mitte".to_string());
        p.set_tangents(Tangents::Split {
            left: Vec3::NEG_X,
            right: Vec3::Z,
        });
    })
    .expect("Index 1 existiert");

    let copy = data.duplicate_after(1).expect("Duplizieren erwartet").clone();

    assert_eq!(data.len(), 4);
    assert_eq!(copy.id(), 3);
    assert_eq!(copy.name.as_deref(), Some("Mitte"));
    assert_eq!(copy.mode, TangentMode::Split);
    assert_eq!(copy.position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(ids(&data), vec![0, 1, 3, 2]);
}

#[test]
fn test_returned_point_is_the_stored_slot() {
    let mut data = trail_with_points(2);

    let appended = data.append(TrailPoint::new(Vec3::splat(7.0))).clone();
    assert_eq!(data.last(), Ok(&appended));
    assert_eq!(appended.id(), 2);

    let copy = data.duplicate_after(0).expect("Index 0 existiert").clone();
    assert_eq!(data.get(1), Ok(&copy));
    assert_eq!(copy.id(), 3);
    assert_eq!(copy.position, Vec3::ZERO);
}

#[test]
fn test_duplicate_last_appends_at_end() {
    let mut data = trail_with_points(2);
    data.duplicate_after(1).expect("Duplizieren erwartet");

    assert_eq!(ids(&data), vec![0, 1, 2]);
    assert_eq!(data.last().map(|p| p.position), Ok(Vec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn test_duplicate_out_of_range() {
    let mut data = trail_with_points(2);
    assert_eq!(
        data.duplicate_after(2).map(|p| p.id()),
        Err(TrailError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(data.len(), 2);
}

#[test]
fn test_remove_by_id_after_earlier_removal() {
    let mut data = trail_with_points(4);
    data.remove_at(0).expect("Index 0 existiert");

    // ID 2 liegt jetzt an Index 1, Entfernen muss nach ID suchen
    let removed = data.remove_by_id(2).expect("ID 2 existiert");
    assert_eq!(removed.position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(ids(&data), vec![1, 3]);
}

#[test]
fn test_remove_by_id_not_found() {
    let mut data = trail_with_points(3);
    data.remove_by_id(1).expect("ID 1 existiert");

    assert_eq!(
        data.remove_by_id(1).map(|p| p.id()),
        Err(TrailError::NotFound(1))
    );
    assert_eq!(ids(&data), vec![0, 2]);
}

#[test]
fn test_remove_at_preserves_order() {
    let mut data = trail_with_points(5);
    let before: Vec<(u64, Vec3)> = data.iter().map(|p| (p.id(), p.position)).collect();

    data.remove_at(2).expect("Index 2 existiert");

    let after: Vec<(u64, Vec3)> = data.iter().map(|p| (p.id(), p.position)).collect();
    assert_eq!(&after[..2], &before[..2]);
    assert_eq!(&after[2..], &before[3..]);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut data = TrailData::new();
    assert_eq!(
        data.remove_at(0).map(|p| p.id()),
        Err(TrailError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_removed_ids_are_never_reused() {
    let mut data = trail_with_points(3);
    data.remove_by_id(2).expect("ID 2 existiert");
    let appended = data.append(TrailPoint::default()).id();

    assert_eq!(appended, 3);
}

#[test]
fn test_ids_stay_unique_over_mixed_edits() {
    let mut data = trail_with_points(2);
    let mut ever_assigned = HashSet::new();
    ever_assigned.extend(ids(&data));

    for step in 0..40usize {
        match step % 4 {
            0 => {
                let id = data.append(TrailPoint::new(Vec3::splat(step as f32))).id();
                assert!(ever_assigned.insert(id), "ID {} wiederverwendet", id);
            }
            1 if !data.is_empty() => {
                let index = step % data.len();
                let id = data.duplicate_after(index).expect("Index gültig").id();
                assert!(ever_assigned.insert(id), "ID {} wiederverwendet", id);
            }
            2 if !data.is_empty() => {
                data.remove_at(step % data.len()).expect("Index gültig");
            }
            _ => {
                if let Some(id) = data.iter().map(TrailPoint::id).max() {
                    data.remove_by_id(id).expect("ID vorhanden");
                }
            }
        }

        let current: HashSet<u64> = data.iter().map(TrailPoint::id).collect();
        assert_eq!(current.len(), data.len(), "doppelte IDs nach Schritt {}", step);
    }
}

#[test]
fn test_get_and_last() {
    let data = trail_with_points(3);
    assert_eq!(data.get(1).map(|p| p.id()), Ok(1));
    assert_eq!(
        data.get(3).map(|p| p.id()),
        Err(TrailError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(data.last().map(|p| p.id()), Ok(2));
    assert_eq!(
        TrailData::new().last().map(|p| p.id()),
        Err(TrailError::EmptyCollection)
    );
}

#[test]
fn test_set_keeps_slot_id() {
    let mut data = trail_with_points(2);
    let mut replacement = TrailPoint::new(Vec3::new(9.0, 9.0, 9.0));
    replacement.set_id(1);

    data.set(0, replacement).expect("Index 0 existiert");

    assert_eq!(ids(&data), vec![0, 1]);
    assert_eq!(data.get(0).map(|p| p.position), Ok(Vec3::splat(9.0)));
    assert!(data.set(5, TrailPoint::default()).is_err());
}

#[test]
fn test_from_points_restores_counter() {
    let mut a = TrailPoint::new(Vec3::ZERO);
    a.set_id(4);
    let mut b = TrailPoint::new(Vec3::X);
    b.set_id(9);

    let mut data = TrailData::from_points(vec![a, b]).expect("IDs eindeutig");
    assert_eq!(data.next_id(), 10);
    assert_eq!(data.append(TrailPoint::default()).id(), 10);
}

#[test]
fn test_from_points_rejects_duplicate_ids() {
    let mut a = TrailPoint::new(Vec3::ZERO);
    a.set_id(3);
    let b = a.clone();

    assert_eq!(
        TrailData::from_points(vec![a, b]),
        Err(TrailError::DuplicateId(3))
    );
}

#[test]
fn test_serde_round_trip_keeps_counter() {
    let mut data = trail_with_points(3);
    data.remove_by_id(2).expect("ID 2 existiert");

    let json = serde_json::to_string(&data).expect("Serialisierung erwartet");
    let mut restored: TrailData = serde_json::from_str(&json).expect("Deserialisierung erwartet");

    assert_eq!(restored, data);
    // ID 2 wurde entfernt und darf auch nach dem Laden nicht wieder vergeben werden
    assert_eq!(restored.append(TrailPoint::default()).id(), 3);
}

#[test]
fn test_deserialize_without_counter() {
    let json = r#"{ "points": [
        { "position": [0.0, 0.0, 0.0], "id": 5 },
        { "position": [1.0, 0.0, 0.0], "id": 2, "mode": "Split" }
    ] }"#;

    let data: TrailData = serde_json::from_str(json).expect("Deserialisierung erwartet");
    assert_eq!(data.next_id(), 6);
    assert_eq!(data.get(1).map(|p| p.mode), Ok(TangentMode::Split));
}

#[test]
fn test_deserialize_duplicate_ids_fails() {
    let json = r#"{ "points": [
        { "position": [0.0, 0.0, 0.0], "id": 1 },
        { "position": [1.0, 0.0, 0.0], "id": 1 }
    ] }"#;

    assert!(serde_json::from_str::<TrailData>(json).is_err());
}
