//! Tunable rope and gesture parameters.
//!
//! Defaults reproduce the storefront hero: five small beads hanging from a
//! ceiling anchor with a larger round pull handle at the end. Every field has
//! a default, so a host can deserialize a partial override from JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Label attached to the handle body; interaction events report it.
pub const DEFAULT_HANDLE_LABEL: &str = "pullCord";

/// Rope geometry, link elasticity, and pull gate thresholds.
///
/// Lengths are CSS pixels, times are milliseconds, gravity is px/s².
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HangerConfig {
    /// Number of intermediate rope beads between the anchor and the handle.
    pub segment_count: usize,
    /// Rest length of a bead-to-bead link.
    pub segment_length: f64,
    /// Radius of each bead.
    pub segment_radius: f64,
    /// Y coordinate of the ceiling anchor point.
    pub anchor_y: f64,
    /// Y coordinate of the first bead.
    pub first_segment_y: f64,
    /// Radius of the pull handle.
    pub handle_radius: f64,
    /// Extra vertical drop from the last bead to the handle at rest.
    pub handle_drop: f64,
    /// Rest length of the last-bead-to-handle link.
    pub handle_link_length: f64,
    /// Restitution of the handle; beads have none.
    pub handle_restitution: f64,
    /// Label reported for the handle in drag events.
    pub handle_label: String,
    /// Link stiffness as a fraction of the full spring rate. Kept below 1 so
    /// the cord stretches a little instead of behaving like a rod.
    pub link_stiffness: f64,
    /// Downward gravity in px/s².
    pub gravity: f64,
    /// Fraction of the gap to the pointer closed per reference frame while dragging.
    pub drag_stiffness: f64,
    /// Release speed (px per reference frame) a pull must exceed.
    pub min_pull_speed: f64,
    /// Minimum time between two accepted pulls.
    pub cooldown_ms: f64,
}

impl Default for HangerConfig {
    fn default() -> Self {
        Self {
            segment_count: 5,
            segment_length: 10.0,
            segment_radius: 3.0,
            anchor_y: 10.0,
            first_segment_y: 30.0,
            handle_radius: 10.0,
            handle_drop: 20.0,
            handle_link_length: 8.0,
            handle_restitution: 0.3,
            handle_label: DEFAULT_HANDLE_LABEL.to_owned(),
            link_stiffness: 0.9,
            gravity: 800.0,
            drag_stiffness: 0.2,
            min_pull_speed: 2.0,
            cooldown_ms: 500.0,
        }
    }
}

impl HangerConfig {
    /// Number of links in the chain: anchor→bead₀, the bead-to-bead links, and
    /// the last-bead→handle link.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.segment_count + 1
    }

    /// Resting y coordinate of the handle centre.
    #[must_use]
    pub fn handle_rest_y(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let beads = self.segment_count as f64;
        self.first_segment_y + beads * self.segment_length + self.handle_drop
    }
}
