//! Input model: pointer buttons and the drag adapter state machine.
//!
//! The drag adapter is the only thing besides the integrator allowed to move
//! rope bodies. It tracks which body is held between pointer-down and
//! pointer-up and where the pointer currently is; the engine turns that into
//! velocity steering on every tick and hands the release to the pull gate.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;
use crate::world::RopeBody;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Current drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No body held; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A rope body is being dragged.
    Dragging {
        /// The held body.
        body: RopeBody,
        /// Latest pointer position; the body is steered toward it.
        target: Point,
    },
}

/// A finished drag, handed to the engine on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub body: RopeBody,
    pub at: Point,
}

/// Tracks pointer grabs of rope bodies.
#[derive(Debug, Clone, Default)]
pub struct DragAdapter {
    state: DragState,
}

impl DragAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `body` if one was picked under the pointer.
    ///
    /// Returns `true` when a drag started. Non-primary buttons never grab.
    pub fn grab(&mut self, picked: Option<RopeBody>, at: Point, button: Button) -> bool {
        if button != Button::Primary {
            return false;
        }
        match picked {
            Some(body) if body != RopeBody::Anchor => {
                self.state = DragState::Dragging { body, target: at };
                true
            }
            _ => false,
        }
    }

    /// Follow the pointer while dragging. Returns `true` when a drag is active.
    pub fn move_to(&mut self, at: Point) -> bool {
        match &mut self.state {
            DragState::Dragging { target, .. } => {
                *target = at;
                true
            }
            DragState::Idle => false,
        }
    }

    /// End the current drag, if any.
    pub fn release(&mut self, at: Point) -> Option<DragRelease> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { body, .. } => Some(DragRelease { body, at }),
            DragState::Idle => None,
        }
    }

    /// Drop the current drag without producing a release (teardown).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}
