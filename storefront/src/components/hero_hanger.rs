//! Bridge component between the page mode signal and the imperative
//! `hanger::engine::Hanger`.
//!
//! ARCHITECTURE
//! ============
//! The engine is owned by this component through `Rc<RefCell<Option<_>>>`
//! and driven by a `requestAnimationFrame` loop. Pointer events go straight
//! to the engine; the actions it returns are folded into the shared
//! `ModeState` and the `<html>` theme attribute.
//!
//! TRADE-OFFS
//! ==========
//! `on_cleanup` only flips an atomic flag because its closure must be
//! `Send`. The frame loop notices the flag on its next tick and tears the
//! engine down from the UI thread, so teardown lags unmount by one frame.

#[cfg(test)]
#[path = "hero_hanger_test.rs"]
mod hero_hanger_test;

use leptos::prelude::*;

use hanger::engine::Action;
use hanger::gesture::Mode;

use crate::state::mode::ModeState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use hanger::config::HangerConfig;
#[cfg(feature = "hydrate")]
use hanger::engine::Hanger;
#[cfg(feature = "hydrate")]
use hanger::input::Button;
#[cfg(feature = "hydrate")]
use hanger::viewport::{Point, Viewport};

#[cfg(feature = "hydrate")]
use crate::util::{frame_loop, theme};

pub const DEFAULT_CURSOR: &str = "grab";

/// What a batch of engine actions changed on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionEffects {
    /// Set when an accepted pull flipped the mode.
    pub mode_changed: Option<Mode>,
    /// Last cursor requested in the batch.
    pub cursor: Option<&'static str>,
}

/// Apply engine actions to the mirrored page state.
pub fn fold_actions(state: &mut ModeState, actions: &[Action]) -> ActionEffects {
    let mut effects = ActionEffects::default();
    for action in actions {
        match action {
            Action::ModeChanged { mode, pulls, at_ms } => {
                state.apply_toggle(*mode, *pulls, *at_ms);
                effects.mode_changed = Some(*mode);
            }
            Action::PullIgnored(reason) => {
                log::debug!("pull ignored: {reason:?}");
            }
            Action::SetCursor(cursor) => effects.cursor = Some(cursor),
        }
    }
    effects
}

/// Cursor CSS for the canvas. Before the first hover report the whole
/// surface shows the grab hand.
pub fn cursor_style(cursor: Option<&'static str>) -> &'static str {
    cursor.unwrap_or(DEFAULT_CURSOR)
}

#[cfg(feature = "hydrate")]
fn measure(canvas: &web_sys::HtmlCanvasElement) -> Viewport {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    Viewport::new(f64::from(canvas.client_width()), f64::from(canvas.client_height()), dpr)
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn dispatch(actions: &[Action], mode_state: RwSignal<ModeState>, cursor: RwSignal<Option<&'static str>>) {
    if actions.is_empty() {
        return;
    }
    let mut next = mode_state.get_untracked();
    let effects = fold_actions(&mut next, actions);
    if let Some(mode) = effects.mode_changed {
        mode_state.set(next);
        theme::apply(mode);
    }
    if effects.cursor.is_some() {
        cursor.set(effects.cursor);
    }
}

/// Canvas host for the pull cord.
///
/// On hydration this attaches a `Hanger` to the canvas, resumes it from the
/// page's current mode, and starts the frame loop.
#[component]
pub fn HeroHanger() -> impl IntoView {
    let mode_state = expect_context::<RwSignal<ModeState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Hanger>));

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let engine = Rc::clone(&engine);
        let alive_for_loop = Arc::clone(&alive);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let surface = canvas.clone();
            let mut instance = match Hanger::attach(Some(canvas), HangerConfig::default(), measure(&surface)) {
                Ok(instance) => instance,
                Err(err) => {
                    log::debug!("hero rope inactive: {err}");
                    return;
                }
            };
            let current = mode_state.get_untracked();
            instance.core.resume(current.mode, current.pulls, current.last_toggle_ms);
            *engine.borrow_mut() = Some(instance);

            let engine_for_loop = Rc::clone(&engine);
            let alive = Arc::clone(&alive_for_loop);
            let started = frame_loop::start(move |dt_ms| {
                let mut slot = engine_for_loop.borrow_mut();
                if !alive.load(Ordering::Relaxed) {
                    if let Some(mut hanger) = slot.take() {
                        hanger.teardown();
                    }
                    return false;
                }
                let Some(hanger) = slot.as_mut() else {
                    return false;
                };
                let viewport = measure(&surface);
                hanger.set_viewport(viewport.width, viewport.height, viewport.dpr);
                if let Err(err) = hanger.frame(dt_ms) {
                    log::debug!("hero rope frame failed: {err:?}");
                }
                true
            });
            if !started {
                log::debug!("hero rope frame loop not scheduled");
            }
        });

        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = mode_state;

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let point = pointer_point(&ev);
                let actions = match engine.borrow_mut().as_mut() {
                    Some(hanger) => hanger.on_pointer_down(point, Button::from_dom(ev.button())),
                    None => return,
                };
                if actions.is_empty() {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {err:?}");
                    }
                }
                dispatch(&actions, mode_state, cursor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let actions = match engine.borrow_mut().as_mut() {
                    Some(hanger) => hanger.on_pointer_move(point),
                    None => return,
                };
                dispatch(&actions, mode_state, cursor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let now_ms = js_sys::Date::now();
                let actions = match engine.borrow_mut().as_mut() {
                    Some(hanger) => hanger.on_pointer_up(point, now_ms),
                    None => return,
                };
                dispatch(&actions, mode_state, cursor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_cancel = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let now_ms = js_sys::Date::now();
                let actions = match engine.borrow_mut().as_mut() {
                    Some(hanger) => hanger.on_pointer_cancel(point, now_ms),
                    None => return,
                };
                dispatch(&actions, mode_state, cursor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <canvas
            class="hero-hanger"
            node_ref=canvas_ref
            style:cursor=move || cursor_style(cursor.get())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        ></canvas>
    }
}
