//! Mode-dependent rope colours.
//!
//! Restyling is display-only: switching palettes never touches the physics.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::gesture::Mode;

/// Colours used to draw the rope for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rope polyline and bead fill.
    pub rope: &'static str,
    /// Handle fill.
    pub handle_fill: &'static str,
    /// Handle outline.
    pub handle_stroke: &'static str,
}

/// Slate cord for the unlit lamp.
pub const DARK: Palette = Palette { rope: "#4b4933", handle_fill: "#64748b", handle_stroke: "#475569" };

/// Warm amber cord for the lit lamp.
pub const ILLUMINATED: Palette = Palette { rope: "#fcd34d", handle_fill: "#fbbf24", handle_stroke: "#f59e0b" };

impl Palette {
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Dark => DARK,
            Mode::Illuminated => ILLUMINATED,
        }
    }
}
