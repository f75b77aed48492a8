//! Rope pull-cord simulation for the storefront hero.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the hero's pull cord: building a small rope out of
//! rigid bodies and elastic links, stepping the physics world once per
//! display refresh, dragging the free end under the pointer, and deciding
//! whether a release counts as a "pull" that flips the page [`gesture::Mode`].
//! The host UI layer is responsible only for wiring DOM events and the frame
//! callback to the engine and for reflecting the resulting
//! [`engine::Action`]s in page state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::HangerCore`] |
//! | [`world`] | Rope chain built on `rapier2d` bodies and spring joints |
//! | [`gesture`] | Pull gate: release speed threshold + cooldown, and the [`gesture::Mode`] flag |
//! | [`input`] | Pointer types and the drag adapter state machine |
//! | [`hit`] | Picking rope bodies under the pointer |
//! | [`viewport`] | Surface dimensions, device pixel ratio, and points |
//! | [`palette`] | Mode-dependent rope colours |
//! | [`render`] | Draws the rope polyline and bodies to a 2D context |
//! | [`config`] | Tunable rope and gesture parameters |
//! | [`consts`] | Shared numeric constants (reference frame rate, step clamps, etc.) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hit;
pub mod input;
pub mod palette;
pub mod render;
pub mod viewport;
pub mod world;

pub use error::HangerError;
