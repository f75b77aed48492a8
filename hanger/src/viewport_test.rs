#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance(a), 5.0);
}

#[test]
fn point_distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(p.distance(p), 0.0);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_default_is_empty() {
    let vp = Viewport::default();
    assert!(vp.is_empty());
    assert_eq!(vp.dpr, 1.0);
}

#[test]
fn viewport_backing_size_scales_by_dpr() {
    let vp = Viewport::new(192.0, 288.0, 2.0);
    assert_eq!(vp.backing_size(), (384, 576));
}

#[test]
fn viewport_backing_size_rounds() {
    let vp = Viewport::new(100.0, 50.0, 1.5);
    assert_eq!(vp.backing_size(), (150, 75));
    let vp = Viewport::new(33.3, 10.0, 1.0);
    assert_eq!(vp.backing_size(), (33, 10));
}

#[test]
fn viewport_rejects_bad_dpr() {
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, -2.0).dpr, 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
}

#[test]
fn viewport_clamps_negative_size() {
    let vp = Viewport::new(-5.0, 20.0, 1.0);
    assert_eq!(vp.width, 0.0);
    assert!(vp.is_empty());
}

#[test]
fn viewport_center_x_is_half_width() {
    assert_eq!(Viewport::new(192.0, 288.0, 1.0).center_x(), 96.0);
}
