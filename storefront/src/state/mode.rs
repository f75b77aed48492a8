//! Page-wide lighting mode shared between the hero and the rest of the page.
//!
//! DESIGN
//! ======
//! The hanger engine owns the pull gate; this struct mirrors its outcome so
//! views can react without borrowing the engine. Only the hero writes it,
//! and only after the gate accepts a pull.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use hanger::gesture::Mode;

/// Mirror of the engine's mode and accepted pull count.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModeState {
    pub mode: Mode,
    pub pulls: u32,
    /// Wall-clock time of the last accepted pull, so a remounted hero keeps
    /// the cooldown.
    pub last_toggle_ms: Option<f64>,
}

impl ModeState {
    pub fn is_illuminated(&self) -> bool {
        self.mode.is_illuminated()
    }

    /// Record an accepted pull reported by the engine at `at_ms`.
    pub fn apply_toggle(&mut self, mode: Mode, pulls: u32, at_ms: f64) {
        self.mode = mode;
        self.pulls = pulls;
        self.last_toggle_ms = Some(at_ms);
    }

    /// Badge text beside the hero heading.
    pub fn badge_label(&self) -> &'static str {
        if self.is_illuminated() { "Light Mode Active" } else { "Dark Mode Ready" }
    }

    pub fn badge_icon(&self) -> &'static str {
        if self.is_illuminated() { "\u{1f4a1}" } else { "\u{1f319}" }
    }

    pub fn pulls_label(&self) -> String {
        format!("Pulls: {}", self.pulls)
    }

    /// Value for the `data-theme` attribute on `<html>`.
    pub fn theme_name(&self) -> &'static str {
        crate::util::theme::theme_name(self.mode)
    }
}
