use super::*;

#[test]
fn generates_requested_count_with_sequential_ids() {
    let swarm = generate(FIREFLY_COUNT, 7);
    assert_eq!(swarm.len(), 20);
    for (index, firefly) in swarm.iter().enumerate() {
        assert_eq!(firefly.id, index);
    }
}

#[test]
fn zero_count_is_empty() {
    assert!(generate(0, 7).is_empty());
}

#[test]
fn values_stay_in_range() {
    for firefly in generate(200, 42) {
        assert!((0.0..100.0).contains(&firefly.x));
        assert!((0.0..100.0).contains(&firefly.y));
        assert!((3.0..7.0).contains(&firefly.size));
        assert!((6.0..14.0).contains(&firefly.duration_s));
        assert!((0.0..3.0).contains(&firefly.delay_s));
        for (dx, dy) in firefly.drift {
            assert!(dx.abs() <= 50.0 && dy.abs() <= 50.0);
        }
    }
}

#[test]
fn same_seed_same_swarm() {
    assert_eq!(generate(FIREFLY_COUNT, 99), generate(FIREFLY_COUNT, 99));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(generate(FIREFLY_COUNT, 1), generate(FIREFLY_COUNT, 2));
}

#[test]
fn style_carries_position_size_and_timing() {
    let firefly = Firefly {
        id: 0,
        x: 12.5,
        y: 80.0,
        size: 4.0,
        duration_s: 9.0,
        delay_s: 1.5,
        drift: [(10.0, -5.0), (-20.0, 30.0)],
    };
    let style = firefly.style();
    assert!(style.contains("left: 12.50%"));
    assert!(style.contains("top: 80.00%"));
    assert!(style.contains("width: 4.00px"));
    assert!(style.contains("animation-duration: 9.00s"));
    assert!(style.contains("animation-delay: 1.50s"));
    assert!(style.contains("--drift-y1: -5.0px"));
    assert!(style.contains("--drift-x2: -20.0px"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_seed_is_fixed_without_a_browser() {
    assert_eq!(page_seed(), FALLBACK_SEED);
}
