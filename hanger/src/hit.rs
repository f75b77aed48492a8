//! Picking rope bodies under the pointer.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::viewport::Point;
use crate::world::{RopeBody, RopeWorld};

/// Find the body under `point`, if any.
///
/// A body is hit when the pointer lies within its radius plus `slop`. The
/// handle wins over beads when both qualify; otherwise the closest bead wins.
/// The anchor is never pickable.
#[must_use]
pub fn pick(world: &RopeWorld, point: Point, slop: f64) -> Option<RopeBody> {
    let hit = |body: RopeBody| -> Option<f64> {
        let pos = world.position(body)?;
        let dist = pos.distance(point);
        (dist <= world.radius(body) + slop).then_some(dist)
    };

    if hit(RopeBody::Handle).is_some() {
        return Some(RopeBody::Handle);
    }

    (0..world.segment_count())
        .map(RopeBody::Segment)
        .filter_map(|body| hit(body).map(|d| (body, d)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(body, _)| body)
}
