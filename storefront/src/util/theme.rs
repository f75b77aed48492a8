//! Page theme attribute.
//!
//! Mirrors the current lighting mode onto a `data-theme` attribute of the
//! `<html>` element so stylesheet rules outside the component tree can
//! follow it. Nothing is persisted; every visit starts dim.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use hanger::gesture::Mode;

pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute value for `mode`.
pub fn theme_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Dark => "dim",
        Mode::Illuminated => "lit",
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: Mode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme_name(mode)) {
                log::debug!("theme attribute not applied: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
