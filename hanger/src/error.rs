//! Error type for engine activation.

use thiserror::Error;

/// Reasons the hanger cannot attach to a rendering surface.
///
/// None of these are fatal for the page: the host logs them and leaves the
/// hero without a pull cord.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HangerError {
    /// The host has no canvas element mounted yet.
    #[error("no rendering surface available")]
    NoSurface,
    /// The canvas refused to hand out a 2D rendering context.
    #[error("2d context unavailable: {0}")]
    Context(String),
}
