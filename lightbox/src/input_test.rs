#![allow(clippy::float_cmp)]

use super::*;

fn dragging(pan: Point) -> ViewerState {
    ViewerState::Dragging { pan, origin: Point::new(10.0, 10.0), moved: true }
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_escape_detected() {
    assert!(Key("Escape".into()).is_escape());
}

#[test]
fn key_other_is_not_escape() {
    assert!(!Key("Enter".into()).is_escape());
    assert!(!Key("escape".into()).is_escape());
}

// =============================================================
// ViewerState predicates
// =============================================================

#[test]
fn default_state_is_closed() {
    assert_eq!(ViewerState::default(), ViewerState::Closed);
    assert!(!ViewerState::Closed.is_open());
}

#[test]
fn flat_is_open_not_zoomed() {
    let s = ViewerState::Flat;
    assert!(s.is_open());
    assert!(!s.is_zoomed());
    assert!(!s.is_dragging());
}

#[test]
fn zoomed_is_open_and_zoomed() {
    let s = ViewerState::Zoomed { pan: Point::default() };
    assert!(s.is_open());
    assert!(s.is_zoomed());
    assert!(!s.is_dragging());
}

#[test]
fn dragging_implies_zoomed() {
    let s = dragging(Point::default());
    assert!(s.is_open());
    assert!(s.is_zoomed());
    assert!(s.is_dragging());
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn pan_is_origin_when_not_zoomed() {
    assert_eq!(ViewerState::Closed.pan(), Point::default());
    assert_eq!(ViewerState::Flat.pan(), Point::default());
}

#[test]
fn pan_reported_while_zoomed_and_dragging() {
    let p = Point::new(4.0, -8.0);
    assert_eq!(ViewerState::Zoomed { pan: p }.pan(), p);
    assert_eq!(dragging(p).pan(), p);
}

#[test]
fn transform_identity_unless_zoomed() {
    assert!(ViewerState::Flat.transform().is_identity());
    let t = ViewerState::Zoomed { pan: Point::new(1.0, 2.0) }.transform();
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.pan(), Point::new(1.0, 2.0));
}

#[test]
fn cursor_per_state() {
    assert_eq!(ViewerState::Closed.cursor(), "");
    assert_eq!(ViewerState::Flat.cursor(), "zoom-in");
    assert_eq!(ViewerState::Zoomed { pan: Point::default() }.cursor(), "grab");
    assert_eq!(dragging(Point::default()).cursor(), "grabbing");
}
