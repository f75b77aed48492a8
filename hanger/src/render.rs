//! Rendering: draws the rope to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the rope world and the active palette and
//! produces pixels; it does not mutate any simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Hanger::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::ROPE_LINE_WIDTH_PX;
use crate::palette::Palette;
use crate::viewport::Viewport;
use crate::world::{BodyView, RopeBody, RopeWorld};

/// Draw the full scene: rope line, beads, then the handle on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    world: &RopeWorld,
    palette: Palette,
    viewport: Viewport,
) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    draw_rope_line(ctx, world, palette);

    let bodies = world.visible_bodies();
    for body in bodies.iter().filter(|b| b.body != RopeBody::Handle) {
        draw_bead(ctx, body, palette)?;
    }
    if let Some(handle) = bodies.iter().find(|b| b.body == RopeBody::Handle) {
        draw_handle(ctx, handle, palette)?;
    }
    Ok(())
}

/// Wipe the surface, used on teardown.
///
/// # Errors
///
/// Returns `Err` if the transform reset fails.
pub fn clear(ctx: &CanvasRenderingContext2d, viewport: Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    Ok(())
}

fn draw_rope_line(ctx: &CanvasRenderingContext2d, world: &RopeWorld, palette: Palette) {
    let points = world.polyline();
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.set_stroke_style_str(palette.rope);
    ctx.set_line_width(ROPE_LINE_WIDTH_PX);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}

fn draw_bead(ctx: &CanvasRenderingContext2d, bead: &BodyView, palette: Palette) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(bead.position.x, bead.position.y, bead.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(palette.rope);
    ctx.fill();
    Ok(())
}

fn draw_handle(ctx: &CanvasRenderingContext2d, handle: &BodyView, palette: Palette) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(handle.position.x, handle.position.y, handle.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(palette.handle_fill);
    ctx.fill();
    ctx.set_stroke_style_str(palette.handle_stroke);
    ctx.set_line_width(ROPE_LINE_WIDTH_PX);
    ctx.stroke();
    Ok(())
}
