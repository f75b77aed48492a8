//! Pull gesture acceptance and the page-wide illumination mode.
//!
//! A drag release on the handle is only a candidate. [`PullGate`] turns it
//! into a mode toggle when two conditions hold: the handle was moving faster
//! than the minimum release speed, and the previous accepted pull is older
//! than the cooldown. Rejected releases leave no trace; the rope simply
//! settles back under gravity.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::HangerConfig;

/// Page-wide illumination flag.
///
/// Every session starts [`Mode::Dark`]. Only an accepted pull changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The lamp is off.
    #[default]
    Dark,
    /// The lamp is on.
    Illuminated,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Illuminated,
            Self::Illuminated => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_illuminated(self) -> bool {
        self == Self::Illuminated
    }
}

/// Why a release did not toggle the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Release speed was at or below the minimum.
    TooSlow,
    /// The previous accepted pull is still within the cooldown window.
    CoolingDown,
}

/// Result of feeding a release into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// The mode flipped; carries the new mode.
    Toggled(Mode),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Speed threshold + cooldown gate over release events.
#[derive(Debug, Clone, PartialEq)]
pub struct PullGate {
    min_speed: f64,
    cooldown_ms: f64,
    last_toggle_ms: Option<f64>,
    mode: Mode,
    pulls: u32,
}

impl PullGate {
    #[must_use]
    pub fn new(min_speed: f64, cooldown_ms: f64) -> Self {
        Self { min_speed, cooldown_ms, last_toggle_ms: None, mode: Mode::Dark, pulls: 0 }
    }

    /// Gate configured from the rope config thresholds.
    #[must_use]
    pub fn from_config(config: &HangerConfig) -> Self {
        Self::new(config.min_pull_speed, config.cooldown_ms)
    }

    /// Continue from a mode and counter the page already shows.
    ///
    /// Used when the hero remounts mid-session. Passing the previous
    /// `last_toggle_ms` keeps the cooldown running across the remount.
    #[must_use]
    pub fn resumed(mut self, mode: Mode, pulls: u32, last_toggle_ms: Option<f64>) -> Self {
        self.mode = mode;
        self.pulls = pulls;
        self.last_toggle_ms = last_toggle_ms;
        self
    }

    /// Evaluate a release of the handle at `now_ms` with the given speed.
    pub fn release(&mut self, speed: f64, now_ms: f64) -> PullOutcome {
        if speed.is_nan() || speed <= self.min_speed {
            return PullOutcome::Ignored(IgnoreReason::TooSlow);
        }
        if let Some(last) = self.last_toggle_ms {
            if now_ms - last <= self.cooldown_ms {
                return PullOutcome::Ignored(IgnoreReason::CoolingDown);
            }
        }
        self.mode = self.mode.toggled();
        self.pulls = self.pulls.saturating_add(1);
        self.last_toggle_ms = Some(now_ms);
        PullOutcome::Toggled(self.mode)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of accepted pulls.
    #[must_use]
    pub fn pulls(&self) -> u32 {
        self.pulls
    }

    /// Timestamp of the last accepted pull, if any.
    #[must_use]
    pub fn last_toggle_ms(&self) -> Option<f64> {
        self.last_toggle_ms
    }
}
