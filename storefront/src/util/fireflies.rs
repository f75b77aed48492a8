//! Decorative fireflies for the illuminated hero.
//!
//! Generated once per page from a seeded RNG; the browser animates them
//! with CSS keyframes, so nothing here runs per frame.

#[cfg(test)]
#[path = "fireflies_test.rs"]
mod fireflies_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const FIREFLY_COUNT: usize = 20;

const MIN_SIZE_PX: f64 = 3.0;
const MAX_SIZE_PX: f64 = 7.0;
const MIN_DURATION_S: f64 = 6.0;
const MAX_DURATION_S: f64 = 14.0;
const MAX_DELAY_S: f64 = 3.0;
/// Wander offsets stay within this many px of the resting spot.
const MAX_DRIFT_PX: f64 = 50.0;

/// Seed used where no clock is available (server render, tests).
pub const FALLBACK_SEED: u64 = 0x1a4d_5eed;

#[derive(Clone, Debug, PartialEq)]
pub struct Firefly {
    pub id: usize,
    /// Horizontal position in percent of the hero width.
    pub x: f64,
    /// Vertical position in percent of the hero height.
    pub y: f64,
    pub size: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    /// Two intermediate wander offsets, in px.
    pub drift: [(f64, f64); 2],
}

impl Firefly {
    /// Inline style consumed by the `.firefly` keyframes.
    pub fn style(&self) -> String {
        let [(dx1, dy1), (dx2, dy2)] = self.drift;
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
             animation-duration: {:.2}s; animation-delay: {:.2}s; \
             --drift-x1: {dx1:.1}px; --drift-y1: {dy1:.1}px; --drift-x2: {dx2:.1}px; --drift-y2: {dy2:.1}px;",
            self.x, self.y, self.size, self.size, self.duration_s, self.delay_s,
        )
    }
}

/// Generate `count` fireflies from `seed`. Same seed, same swarm.
pub fn generate(count: usize, seed: u64) -> Vec<Firefly> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|id| Firefly {
            id,
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(MIN_SIZE_PX..MAX_SIZE_PX),
            duration_s: rng.random_range(MIN_DURATION_S..MAX_DURATION_S),
            delay_s: rng.random_range(0.0..MAX_DELAY_S),
            drift: [
                (rng.random_range(-MAX_DRIFT_PX..MAX_DRIFT_PX), rng.random_range(-MAX_DRIFT_PX..MAX_DRIFT_PX)),
                (rng.random_range(-MAX_DRIFT_PX..MAX_DRIFT_PX), rng.random_range(-MAX_DRIFT_PX..MAX_DRIFT_PX)),
            ],
        })
        .collect()
}

/// Seed for this page view: wall clock in the browser, fixed otherwise.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn page_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_SEED
    }
}
