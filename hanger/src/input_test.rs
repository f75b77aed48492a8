use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

// =============================================================
// DragAdapter
// =============================================================

#[test]
fn adapter_starts_idle() {
    let a = DragAdapter::new();
    assert_eq!(a.state(), DragState::Idle);
    assert!(!a.is_dragging());
}

#[test]
fn grab_handle_starts_drag() {
    let mut a = DragAdapter::new();
    assert!(a.grab(Some(RopeBody::Handle), pt(5.0, 6.0), Button::Primary));
    assert_eq!(a.state(), DragState::Dragging { body: RopeBody::Handle, target: pt(5.0, 6.0) });
}

#[test]
fn grab_nothing_stays_idle() {
    let mut a = DragAdapter::new();
    assert!(!a.grab(None, pt(5.0, 6.0), Button::Primary));
    assert!(!a.is_dragging());
}

#[test]
fn grab_anchor_is_refused() {
    let mut a = DragAdapter::new();
    assert!(!a.grab(Some(RopeBody::Anchor), pt(0.0, 0.0), Button::Primary));
    assert!(!a.is_dragging());
}

#[test]
fn secondary_button_never_grabs() {
    let mut a = DragAdapter::new();
    assert!(!a.grab(Some(RopeBody::Handle), pt(0.0, 0.0), Button::Secondary));
    assert!(!a.grab(Some(RopeBody::Handle), pt(0.0, 0.0), Button::Middle));
    assert!(!a.is_dragging());
}

#[test]
fn move_updates_target_while_dragging() {
    let mut a = DragAdapter::new();
    a.grab(Some(RopeBody::Segment(2)), pt(1.0, 1.0), Button::Primary);
    assert!(a.move_to(pt(40.0, 80.0)));
    assert_eq!(a.state(), DragState::Dragging { body: RopeBody::Segment(2), target: pt(40.0, 80.0) });
}

#[test]
fn move_while_idle_is_ignored() {
    let mut a = DragAdapter::new();
    assert!(!a.move_to(pt(40.0, 80.0)));
    assert_eq!(a.state(), DragState::Idle);
}

#[test]
fn release_returns_held_body_and_resets() {
    let mut a = DragAdapter::new();
    a.grab(Some(RopeBody::Handle), pt(1.0, 1.0), Button::Primary);
    let released = a.release(pt(9.0, 9.0));
    assert_eq!(released, Some(DragRelease { body: RopeBody::Handle, at: pt(9.0, 9.0) }));
    assert!(!a.is_dragging());
}

#[test]
fn release_without_drag_is_none() {
    let mut a = DragAdapter::new();
    assert_eq!(a.release(pt(0.0, 0.0)), None);
}

#[test]
fn cancel_drops_drag_silently() {
    let mut a = DragAdapter::new();
    a.grab(Some(RopeBody::Handle), pt(1.0, 1.0), Button::Primary);
    a.cancel();
    assert_eq!(a.release(pt(0.0, 0.0)), None);
}
