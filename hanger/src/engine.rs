use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::HangerConfig;
use crate::consts::{MAX_STEP_MS, MIN_STEP_MS, PICK_SLOP_PX};
use crate::error::HangerError;
use crate::gesture::{IgnoreReason, Mode, PullGate, PullOutcome};
use crate::hit;
use crate::input::{Button, DragAdapter, DragState};
use crate::palette::Palette;
use crate::render;
use crate::viewport::{Point, Viewport};
use crate::world::RopeWorld;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An accepted pull flipped the page mode.
    ModeChanged { mode: Mode, pulls: u32, at_ms: f64 },
    /// The handle was released but the pull gate rejected it.
    PullIgnored(IgnoreReason),
    /// Suggested CSS cursor for the surface.
    SetCursor(&'static str),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Hanger` so it can be tested without WASM/browser dependencies.
pub struct HangerCore {
    pub world: RopeWorld,
    pub gate: PullGate,
    pub drag: DragAdapter,
    pub viewport: Viewport,
    active: bool,
}

impl HangerCore {
    /// Build the rope hanging from the horizontal centre of `viewport`.
    #[must_use]
    pub fn new(config: HangerConfig, viewport: Viewport) -> Self {
        let gate = PullGate::from_config(&config);
        let world = RopeWorld::new(config, viewport.center_x());
        Self { world, gate, drag: DragAdapter::new(), viewport, active: true }
    }

    /// Continue from the mode, pull count and last accepted pull time the
    /// page already shows.
    pub fn resume(&mut self, mode: Mode, pulls: u32, last_toggle_ms: Option<f64>) {
        self.gate = self.gate.clone().resumed(mode, pulls, last_toggle_ms);
    }

    // --- Frame ---

    /// Advance one display frame of `dt_ms` milliseconds.
    ///
    /// The step is clamped so a long pause between frames cannot blow the
    /// rope apart. A held body is steered toward the pointer before integration.
    pub fn tick(&mut self, dt_ms: f64) {
        if !self.active {
            return;
        }
        let dt = if dt_ms.is_finite() { dt_ms.clamp(MIN_STEP_MS, MAX_STEP_MS) } else { MIN_STEP_MS };
        if let DragState::Dragging { body, target } = self.drag.state() {
            let stiffness = self.world.config().drag_stiffness;
            self.world.drag_toward(body, target, stiffness, dt);
        }
        self.world.step(dt);
    }

    // --- Viewport ---

    /// Record new surface dimensions.
    ///
    /// The rope is not re-anchored; a resized surface may show the cord off
    /// centre until the next [`HangerCore::reinitialize`].
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if !self.active {
            return Vec::new();
        }
        let picked = hit::pick(&self.world, pt, PICK_SLOP_PX);
        if self.drag.grab(picked, pt, button) {
            vec![Action::SetCursor("grabbing")]
        } else {
            Vec::new()
        }
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if !self.active || self.drag.move_to(pt) {
            return Vec::new();
        }
        let cursor = if hit::pick(&self.world, pt, PICK_SLOP_PX).is_some() { "grab" } else { "default" };
        vec![Action::SetCursor(cursor)]
    }

    /// Finish a drag at `now_ms` (wall clock, milliseconds).
    ///
    /// Only a release of the body labelled as the handle is offered to the
    /// pull gate, using the handle's speed at the moment of release.
    pub fn on_pointer_up(&mut self, pt: Point, now_ms: f64) -> Vec<Action> {
        let Some(release) = self.drag.release(pt) else {
            return Vec::new();
        };
        let mut actions = vec![Action::SetCursor("grab")];

        let handle_label = self.world.config().handle_label.as_str();
        if self.world.label(release.body) != Some(handle_label) {
            return actions;
        }

        let speed = self.world.speed(release.body);
        match self.gate.release(speed, now_ms) {
            PullOutcome::Toggled(mode) => {
                log::info!("pull accepted at {speed:.2} px/frame: mode {mode:?}, pulls {}", self.gate.pulls());
                actions.push(Action::ModeChanged { mode, pulls: self.gate.pulls(), at_ms: now_ms });
            }
            PullOutcome::Ignored(reason) => {
                log::debug!("pull ignored at {speed:.2} px/frame: {reason:?}");
                actions.push(Action::PullIgnored(reason));
            }
        }
        actions
    }

    /// Pointer left the surface or the browser cancelled the gesture.
    ///
    /// Treated as a release so a flick that leaves the surface still counts.
    pub fn on_pointer_cancel(&mut self, pt: Point, now_ms: f64) -> Vec<Action> {
        self.on_pointer_up(pt, now_ms)
    }

    // --- Lifecycle ---

    /// Stop simulating and remove every body and link. Idempotent.
    pub fn teardown(&mut self) {
        if self.active {
            log::info!("hanger teardown: removing {} bodies", self.world.body_count());
        }
        self.active = false;
        self.drag.cancel();
        self.world.clear();
    }

    /// Rebuild the rope centred in the current viewport.
    pub fn reinitialize(&mut self) {
        self.drag.cancel();
        self.world.rebuild(self.viewport.center_x());
        self.active = true;
    }

    // --- Queries ---

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.gate.mode()
    }

    #[must_use]
    pub fn pulls(&self) -> u32 {
        self.gate.pulls()
    }

    /// Colours matching the current mode.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.gate.mode())
    }
}

/// The full hanger engine. Wraps `HangerCore` and owns the browser canvas element.
pub struct Hanger {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: HangerCore,
}

impl Hanger {
    /// Bind a new engine to the given canvas element.
    ///
    /// # Errors
    ///
    /// [`HangerError::NoSurface`] when `canvas` is `None`, and
    /// [`HangerError::Context`] when no 2D context can be obtained.
    pub fn attach(
        canvas: Option<HtmlCanvasElement>,
        config: HangerConfig,
        viewport: Viewport,
    ) -> Result<Self, HangerError> {
        let canvas = canvas.ok_or(HangerError::NoSurface)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| HangerError::Context(format!("{e:?}")))?
            .ok_or_else(|| HangerError::Context("canvas returned no context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HangerError::Context("context is not 2d".into()))?;

        let mut hanger = Self { canvas, ctx, core: HangerCore::new(config, viewport) };
        hanger.resize_backing_store(viewport);
        log::info!("hanger attached: {:.0}x{:.0} @{}x", viewport.width, viewport.height, viewport.dpr);
        Ok(hanger)
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        let next = Viewport::new(width_css, height_css, dpr);
        if next == self.core.viewport {
            return;
        }
        self.resize_backing_store(next);
        self.core.set_viewport(next);
    }

    fn resize_backing_store(&self, viewport: Viewport) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    // --- Frame ---

    /// Advance the simulation by `dt_ms` and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, dt_ms: f64) -> Result<(), JsValue> {
        self.core.tick(dt_ms);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        if !self.core.is_active() {
            return Ok(());
        }
        render::draw(&self.ctx, &self.core.world, self.core.palette(), self.core.viewport)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point, now_ms: f64) -> Vec<Action> {
        self.core.on_pointer_up(pt, now_ms)
    }

    pub fn on_pointer_cancel(&mut self, pt: Point, now_ms: f64) -> Vec<Action> {
        self.core.on_pointer_cancel(pt, now_ms)
    }

    // --- Lifecycle ---

    /// Stop the simulation, remove all bodies and links, and release the
    /// canvas backing store. Safe to call more than once.
    pub fn teardown(&mut self) {
        let was_active = self.core.is_active();
        self.core.teardown();
        if !was_active {
            return;
        }
        if let Err(err) = render::clear(&self.ctx, self.core.viewport) {
            log::debug!("hanger clear failed: {err:?}");
        }
        self.canvas.set_width(0);
        self.canvas.set_height(0);
    }
}
