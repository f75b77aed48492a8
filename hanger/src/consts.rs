//! Shared numeric constants for the hanger crate.

// ── Time ────────────────────────────────────────────────────────

/// Reference display refresh rate. Release speeds are measured in pixels
/// per reference frame so thresholds read the same on any monitor.
pub const REFERENCE_FPS: f64 = 60.0;

/// Duration of one reference frame in milliseconds.
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / REFERENCE_FPS;

/// Smallest integrator step accepted from the host, in milliseconds.
pub const MIN_STEP_MS: f64 = 1.0;

/// Largest integrator step accepted from the host, in milliseconds.
///
/// A backgrounded tab can report frame gaps of several seconds; stepping
/// that far at once would fling the rope out of the surface.
pub const MAX_STEP_MS: f64 = 1000.0 / 30.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Extra pick radius around rope bodies, in CSS pixels.
pub const PICK_SLOP_PX: f64 = 6.0;

// ── Rope springs ────────────────────────────────────────────────

/// Spring rate of a link with stiffness 1.0 (acceleration-based, 1/s²).
pub const LINK_SPRING_RATE: f64 = 4000.0;

/// Damping applied to every link spring (acceleration-based, 1/s).
pub const LINK_DAMPING: f64 = 24.0;

/// Linear damping on every rope body so the cord settles instead of swinging forever.
pub const BODY_LINEAR_DAMPING: f64 = 0.6;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke width of the rope polyline and handle outline, in CSS pixels.
pub const ROPE_LINE_WIDTH_PX: f64 = 3.0;
