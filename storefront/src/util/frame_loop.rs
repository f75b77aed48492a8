//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! ARCHITECTURE
//! ============
//! The callback closure lives in a shared holder so it can queue itself for
//! the next display refresh. The loop ends when the frame callback returns
//! `false` or the browser refuses to schedule; either way the holder is
//! emptied, which breaks the `Rc` cycle and frees the closure after the
//! current frame returns.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use hanger::consts::REFERENCE_FRAME_MS;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Frame delta for `now_ts` given the previous RAF timestamp.
///
/// The first frame has no predecessor and reports one reference frame.
pub fn frame_delta_ms(prev_ts: Option<f64>, now_ts: f64) -> f64 {
    match prev_ts {
        Some(prev) if now_ts >= prev => now_ts - prev,
        _ => REFERENCE_FRAME_MS,
    }
}

/// Run `on_frame(dt_ms)` once per display refresh until it returns `false`.
///
/// Returns `false` when the first frame could not be scheduled.
#[cfg(feature = "hydrate")]
pub fn start<F>(mut on_frame: F) -> bool
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(window) = web_sys::window() else {
        return false;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut prev_ts: Option<f64> = None;

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let dt_ms = frame_delta_ms(prev_ts, ts);
        prev_ts = Some(ts);

        let scheduled = on_frame(dt_ms)
            && holder_for_cb.borrow().as_ref().is_some_and(|next| {
                window_for_cb
                    .request_animation_frame(next.as_ref().unchecked_ref())
                    .is_ok()
            });
        if !scheduled {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
        return false;
    }
    *holder.borrow_mut() = Some(cb);
    true
}
