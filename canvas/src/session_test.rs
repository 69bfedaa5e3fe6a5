#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Paint a committed square zone covering `[x0, x1] x [y0, y1]`.
fn paint_rect(store: &mut SessionStore, x0: f64, y0: f64, x1: f64, y1: f64) {
    store.begin_zone(pt(x0, y0));
    store.extend_zone(pt(x1, y0));
    store.extend_zone(pt(x1, y1));
    store.extend_zone(pt(x0, y1));
    assert!(matches!(store.end_zone(), ZoneEnd::Committed { .. }));
}

// =============================================================
// Finger
// =============================================================

#[test]
fn finger_default_is_thumb() {
    assert_eq!(Finger::default(), Finger::Thumb);
}

#[test]
fn finger_index_round_trips() {
    for (i, f) in Finger::ALL.iter().enumerate() {
        assert_eq!(f.index(), i);
        assert_eq!(Finger::from_index(i), Some(*f));
    }
    assert_eq!(Finger::from_index(5), None);
}

#[test]
fn finger_names_and_colors() {
    assert_eq!(Finger::Thumb.name(), "Thumb");
    assert_eq!(Finger::Pinky.name(), "Pinky");
    assert_eq!(Finger::Thumb.color(), "#4a4a4a");
    assert_eq!(Finger::Index.color(), "#14b8a6");
    assert_eq!(Finger::Pinky.color(), "#ec4899");
}

#[test]
fn finger_serde_lowercase() {
    assert_eq!(serde_json::to_value(Finger::Ring).unwrap(), serde_json::json!("ring"));
    let f: Finger = serde_json::from_str("\"middle\"").unwrap();
    assert_eq!(f, Finger::Middle);
}

#[test]
fn finger_deserializes_from_id() {
    for (i, f) in Finger::ALL.iter().enumerate() {
        let parsed: Finger = serde_json::from_str(&i.to_string()).unwrap();
        assert_eq!(parsed, *f);
    }
}

#[test]
fn finger_name_match_ignores_case() {
    let f: Finger = serde_json::from_str("\"Pinky\"").unwrap();
    assert_eq!(f, Finger::Pinky);
}

#[test]
fn finger_id_past_pinky_is_rejected() {
    let err = serde_json::from_str::<Finger>("5").unwrap_err();
    assert!(err.to_string().contains("finger id 5 is out of range"), "{err}");
    assert_eq!(Finger::try_from(FingerRef::Id(u64::MAX)), Err(FingerError::OutOfRange(u64::MAX)));
}

#[test]
fn unknown_finger_name_is_rejected() {
    assert_eq!(
        Finger::try_from(FingerRef::Name("toe".to_owned())),
        Err(FingerError::UnknownName("toe".to_owned()))
    );
}

// =============================================================
// Capture
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = SessionStore::new();
    assert!(store.points(Finger::Thumb).is_empty());
    assert_eq!(store.fingers().count(), 0);
    assert!(store.zones().is_empty());
    assert!(!store.has_draft());
}

#[test]
fn capture_without_zones_always_admits() {
    let mut store = SessionStore::new();
    for p in [pt(10.0, 10.0), pt(20.0, 10.0), pt(15.0, 20.0)] {
        assert_eq!(store.capture(Finger::Thumb, p), Capture::Admitted);
    }
    assert_eq!(store.points(Finger::Thumb).len(), 3);
}

#[test]
fn capture_preserves_order() {
    let mut store = SessionStore::new();
    store.capture(Finger::Index, pt(3.0, 3.0));
    store.capture(Finger::Index, pt(1.0, 1.0));
    store.capture(Finger::Index, pt(2.0, 2.0));
    assert_eq!(store.points(Finger::Index), &[pt(3.0, 3.0), pt(1.0, 1.0), pt(2.0, 2.0)]);
}

#[test]
fn capture_keeps_fingers_separate() {
    let mut store = SessionStore::new();
    store.capture(Finger::Thumb, pt(1.0, 1.0));
    store.capture(Finger::Pinky, pt(2.0, 2.0));
    store.capture(Finger::Pinky, pt(3.0, 3.0));
    assert_eq!(store.points(Finger::Thumb).len(), 1);
    assert_eq!(store.points(Finger::Pinky).len(), 2);
    assert!(store.points(Finger::Middle).is_empty());
}

#[test]
fn capture_inside_zone_is_suppressed() {
    let mut store = SessionStore::new();
    paint_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(store.capture(Finger::Thumb, pt(50.0, 50.0)), Capture::Suppressed);
    assert!(store.points(Finger::Thumb).is_empty());
    assert_eq!(store.fingers().count(), 0);
}

#[test]
fn capture_outside_zone_is_admitted() {
    let mut store = SessionStore::new();
    paint_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(store.capture(Finger::Thumb, pt(150.0, 50.0)), Capture::Admitted);
}

#[test]
fn zone_does_not_remove_existing_points() {
    let mut store = SessionStore::new();
    store.capture(Finger::Ring, pt(50.0, 50.0));
    paint_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(store.points(Finger::Ring), &[pt(50.0, 50.0)]);
}

#[test]
fn draft_zone_does_not_suppress_capture() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(0.0, 0.0));
    store.extend_zone(pt(100.0, 0.0));
    store.extend_zone(pt(100.0, 100.0));
    store.extend_zone(pt(0.0, 100.0));
    assert_eq!(store.capture(Finger::Thumb, pt(50.0, 50.0)), Capture::Admitted);
}

// =============================================================
// Zone lifecycle
// =============================================================

#[test]
fn begin_zone_starts_draft_with_point() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(1.0, 2.0));
    assert_eq!(store.draft_zone(), &[pt(1.0, 2.0)]);
    assert!(store.has_draft());
}

#[test]
fn begin_zone_replaces_unfinished_draft() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(1.0, 1.0));
    store.extend_zone(pt(2.0, 2.0));
    store.begin_zone(pt(9.0, 9.0));
    assert_eq!(store.draft_zone(), &[pt(9.0, 9.0)]);
}

#[test]
fn end_zone_commits_three_vertices() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(0.0, 0.0));
    store.extend_zone(pt(10.0, 0.0));
    store.extend_zone(pt(5.0, 10.0));
    assert_eq!(store.end_zone(), ZoneEnd::Committed { index: 0 });
    assert_eq!(store.zones().len(), 1);
    assert_eq!(store.zones()[0].points().len(), 3);
    assert!(!store.has_draft());
}

#[test]
fn end_zone_discards_two_vertices_and_clears_draft() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(0.0, 0.0));
    store.extend_zone(pt(10.0, 0.0));
    assert_eq!(store.end_zone(), ZoneEnd::Discarded { vertices: 2 });
    assert!(store.zones().is_empty());
    assert!(store.draft_zone().is_empty());
}

#[test]
fn end_zone_without_draft_discards_nothing() {
    let mut store = SessionStore::new();
    assert_eq!(store.end_zone(), ZoneEnd::Discarded { vertices: 0 });
}

#[test]
fn committed_indices_increase() {
    let mut store = SessionStore::new();
    paint_rect(&mut store, 0.0, 0.0, 1.0, 1.0);
    store.begin_zone(pt(5.0, 5.0));
    store.extend_zone(pt(6.0, 5.0));
    store.extend_zone(pt(6.0, 6.0));
    assert_eq!(store.end_zone(), ZoneEnd::Committed { index: 1 });
}

#[test]
fn abort_zone_drops_draft() {
    let mut store = SessionStore::new();
    store.begin_zone(pt(0.0, 0.0));
    store.extend_zone(pt(10.0, 0.0));
    store.extend_zone(pt(5.0, 10.0));
    store.abort_zone();
    assert!(!store.has_draft());
    assert!(store.zones().is_empty());
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_zones_keeps_points() {
    let mut store = SessionStore::new();
    store.capture(Finger::Thumb, pt(500.0, 500.0));
    paint_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    store.begin_zone(pt(1.0, 1.0));
    store.clear_zones();
    assert!(store.zones().is_empty());
    assert!(!store.has_draft());
    assert_eq!(store.points(Finger::Thumb).len(), 1);
    assert_eq!(store.capture(Finger::Thumb, pt(50.0, 50.0)), Capture::Admitted);
}

#[test]
fn clear_all_resets_everything() {
    let mut store = SessionStore::new();
    store.capture(Finger::Thumb, pt(500.0, 500.0));
    paint_rect(&mut store, 0.0, 0.0, 100.0, 100.0);
    store.begin_zone(pt(1.0, 1.0));
    store.clear_all();
    assert_eq!(store.fingers().count(), 0);
    assert!(store.zones().is_empty());
    assert!(!store.has_draft());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn fingers_iterate_in_finger_order() {
    let mut store = SessionStore::new();
    store.capture(Finger::Pinky, pt(1.0, 1.0));
    store.capture(Finger::Thumb, pt(1.0, 1.0));
    store.capture(Finger::Middle, pt(1.0, 1.0));
    let order: Vec<Finger> = store.fingers().map(|(f, _)| f).collect();
    assert_eq!(order, vec![Finger::Thumb, Finger::Middle, Finger::Pinky]);
}

#[test]
fn dots_summary_empty_is_none() {
    assert_eq!(SessionStore::new().dots_summary(), "None");
}

#[test]
fn dots_summary_lists_counts() {
    let mut store = SessionStore::new();
    store.capture(Finger::Ring, pt(1.0, 1.0));
    store.capture(Finger::Thumb, pt(1.0, 1.0));
    store.capture(Finger::Thumb, pt(2.0, 2.0));
    assert_eq!(store.dots_summary(), "Thumb: 2, Ring: 1");
}

#[test]
fn analyze_end_to_end_triangle() {
    let mut store = SessionStore::new();
    for p in [pt(10.0, 10.0), pt(20.0, 10.0), pt(15.0, 20.0)] {
        store.capture(Finger::Thumb, p);
    }
    let analysis = store.analyze(Finger::Thumb, &LayoutConfig::default());
    assert_eq!(analysis.point_count, 3);
    let c = analysis.centroid.unwrap();
    assert_eq!(c.x, 15.0);
    assert!((c.y - 13.333_333_333).abs() < 1e-6);
    assert!(analysis.direction.is_some());
    assert_eq!(analysis.squares.len(), 3);
    assert_eq!(analysis.squares[1].center, c);
}

#[test]
fn analyze_single_point_has_no_direction() {
    let mut store = SessionStore::new();
    store.capture(Finger::Index, pt(100.0, 100.0));
    let analysis = store.analyze(Finger::Index, &LayoutConfig::default());
    assert!(analysis.direction.is_none());
    assert_eq!(analysis.squares.len(), 3);
    assert!(analysis.squares.iter().all(|s| s.angle_rad == 0.0));
}

#[test]
fn analyze_unused_finger_is_empty() {
    let analysis = SessionStore::new().analyze(Finger::Middle, &LayoutConfig::default());
    assert_eq!(analysis.point_count, 0);
    assert!(analysis.centroid.is_none());
    assert!(analysis.direction.is_none());
    assert!(analysis.squares.is_empty());
}
