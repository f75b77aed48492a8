#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point on the rendering surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Rendering surface dimensions.
///
/// `width` / `height` are in CSS pixels.
/// `dpr` is the device pixel ratio used to size the backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport, clamping degenerate sizes and ratios.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { width: width.max(0.0), height: height.max(0.0), dpr }
    }

    /// Backing store size in device pixels, rounded to whole pixels.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = (
            (self.width * self.dpr).round() as u32,
            (self.height * self.dpr).round() as u32,
        );
        size
    }

    /// Horizontal centre of the surface; the rope hangs from here.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width * 0.5
    }

    /// Whether the surface has any drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
