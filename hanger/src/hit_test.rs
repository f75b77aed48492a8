use super::*;
use crate::config::HangerConfig;

fn world() -> RopeWorld {
    RopeWorld::new(HangerConfig::default(), 100.0)
}

#[test]
fn pick_handle_at_its_centre() {
    assert_eq!(pick(&world(), Point::new(100.0, 100.0), 0.0), Some(RopeBody::Handle));
}

#[test]
fn pick_handle_near_its_edge() {
    let w = world();
    assert_eq!(pick(&w, Point::new(109.0, 100.0), 0.0), Some(RopeBody::Handle));
    assert_eq!(pick(&w, Point::new(114.0, 100.0), 0.0), None);
    assert_eq!(pick(&w, Point::new(114.0, 100.0), 6.0), Some(RopeBody::Handle));
}

#[test]
fn pick_closest_bead() {
    let w = world();
    assert_eq!(pick(&w, Point::new(100.0, 41.0), 6.0), Some(RopeBody::Segment(1)));
    assert_eq!(pick(&w, Point::new(100.0, 49.0), 6.0), Some(RopeBody::Segment(2)));
}

#[test]
fn handle_wins_over_overlapping_bead() {
    let w = world();
    // Last bead sits at y=70 (r=3), handle at y=100 (r=10); with a large slop both qualify.
    assert_eq!(pick(&w, Point::new(100.0, 78.0), 15.0), Some(RopeBody::Handle));
}

#[test]
fn anchor_is_never_picked() {
    assert_eq!(pick(&world(), Point::new(100.0, 10.0), 5.0), None);
}

#[test]
fn empty_space_picks_nothing() {
    assert_eq!(pick(&world(), Point::new(10.0, 200.0), 6.0), None);
}

#[test]
fn cleared_world_picks_nothing() {
    let mut w = world();
    w.clear();
    assert_eq!(pick(&w, Point::new(100.0, 100.0), 6.0), None);
}
