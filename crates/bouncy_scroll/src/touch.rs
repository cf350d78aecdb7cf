//! Touch routing
//!
//! Decides, per touch event, whether a gesture scrolls the outer surface or
//! falls through to the content view. Each event visits two stages in order:
//!
//! 1. **Intercept**: records where the gesture started. Never blocks the
//!    event.
//! 2. **Handle**: the outer surface owns the gesture if it started on the
//!    content, or if it lands on the content while no drag that started
//!    outside it is in progress.
//!
//! Dragging from empty space therefore never grabs the content, even when the
//! finger passes over it.

use bouncy_core::TouchPhase;

/// Where the current gesture started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub dragging_inside_content: bool,
    pub dragging_outside_content: bool,
}

/// Outcome of the handling stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDisposition {
    /// The outer surface scrolls with the gesture
    Scroll,
    /// Not consumed; the event falls through to the content
    PassThrough,
}

impl TouchDisposition {
    pub fn is_consumed(&self) -> bool {
        matches!(self, TouchDisposition::Scroll)
    }
}

/// Gesture ownership state machine
#[derive(Debug, Default)]
pub struct TouchRouter {
    state: DragState,
}

impl TouchRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Interception stage. `touching` is the hit test result for this event.
    pub fn intercept(&mut self, phase: TouchPhase, touching: bool) {
        let flag = if touching {
            &mut self.state.dragging_inside_content
        } else {
            &mut self.state.dragging_outside_content
        };

        match phase {
            TouchPhase::Down => *flag = true,
            TouchPhase::Up | TouchPhase::Cancel => *flag = false,
            TouchPhase::Move => {}
        }
    }

    /// Handling stage. Must run after [`intercept`](Self::intercept) for the
    /// same event.
    pub fn handle(&mut self, phase: TouchPhase, touching: bool) -> TouchDisposition {
        let owned = self.state.dragging_inside_content
            || (touching && !self.state.dragging_outside_content);

        if owned {
            if phase.is_release() {
                self.state.dragging_inside_content = false;
            }
            tracing::trace!("touch {:?} scrolls surface", phase);
            TouchDisposition::Scroll
        } else {
            if phase.is_release() {
                self.state = DragState::default();
            }
            tracing::trace!("touch {:?} passes through", phase);
            TouchDisposition::PassThrough
        }
    }

    /// Forget any gesture in progress
    pub fn reset(&mut self) {
        self.state = DragState::default();
    }
}
