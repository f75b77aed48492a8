#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_hero_rope() {
    let cfg = HangerConfig::default();
    assert_eq!(cfg.segment_count, 5);
    assert_eq!(cfg.segment_length, 10.0);
    assert_eq!(cfg.handle_label, "pullCord");
    assert_eq!(cfg.min_pull_speed, 2.0);
    assert_eq!(cfg.cooldown_ms, 500.0);
}

#[test]
fn default_link_stiffness_is_elastic() {
    let cfg = HangerConfig::default();
    assert!(cfg.link_stiffness > 0.0);
    assert!(cfg.link_stiffness < 1.0);
}

#[test]
fn handle_is_bouncier_than_beads() {
    let cfg = HangerConfig::default();
    assert!(cfg.handle_restitution > 0.0);
    assert!(cfg.handle_radius > cfg.segment_radius);
}

#[test]
fn link_count_includes_anchor_and_handle_links() {
    let cfg = HangerConfig { segment_count: 3, ..Default::default() };
    assert_eq!(cfg.link_count(), 4);
}

#[test]
fn handle_rest_y_sits_below_last_bead() {
    let cfg = HangerConfig::default();
    assert_eq!(cfg.handle_rest_y(), 30.0 + 50.0 + 20.0);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: HangerConfig = serde_json::from_str(r#"{ "segment_count": 8, "cooldown_ms": 750 }"#).unwrap();
    assert_eq!(cfg.segment_count, 8);
    assert_eq!(cfg.cooldown_ms, 750.0);
    assert_eq!(cfg.segment_length, 10.0);
    assert_eq!(cfg.handle_label, DEFAULT_HANDLE_LABEL);
}

#[test]
fn empty_json_is_default() {
    let cfg: HangerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, HangerConfig::default());
}
