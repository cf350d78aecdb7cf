//! Resting position and entrance animation

use bouncy_animation::{Easing, OffsetAnimation};

use crate::surface::ContentView;

/// Inner offset the content container is parked at. Zero would sit exactly
/// on the edge and re-trigger edge handling.
pub const RESTING_INNER_OFFSET: i32 = 1;

/// Outer offset the entrance animation starts from
pub const ENTRANCE_START_OFFSET: i32 = 1;

/// Computes the absolute resting offset and owns the cached entrance
/// animation. Any input change rebuilds both.
#[derive(Debug, Clone)]
pub struct PositionController {
    relative_start: f32,
    viewport_height: i32,
    duration_ms: i32,
    easing: Easing,
    absolute_start: i32,
    entrance: OffsetAnimation,
}

impl PositionController {
    pub fn new(relative_start: f32, duration_ms: i32, easing: Easing) -> Self {
        let mut controller = Self {
            relative_start,
            viewport_height: 0,
            duration_ms,
            easing,
            absolute_start: 0,
            entrance: OffsetAnimation::new(ENTRANCE_START_OFFSET, 0, 0, easing),
        };
        controller.rebuild();
        controller
    }

    pub fn relative_start(&self) -> f32 {
        self.relative_start
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn duration_ms(&self) -> i32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Outer offset the content rests at
    pub fn absolute_start(&self) -> i32 {
        self.absolute_start
    }

    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height;
        self.rebuild();
    }

    pub fn set_relative_start(&mut self, relative_start: f32) {
        self.relative_start = relative_start;
        self.rebuild();
    }

    pub fn set_duration_ms(&mut self, duration_ms: i32) {
        self.duration_ms = duration_ms;
        self.rebuild();
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
        self.rebuild();
    }

    /// Park the content's own container at its resting inner offset
    pub fn reset_position<C: ContentView>(&self, content: Option<&mut C>) {
        if let Some(content) = content {
            content.set_inner_offset(RESTING_INNER_OFFSET);
        }
    }

    /// A fresh copy of the entrance animation, ready to start
    pub fn entrance_animation(&self) -> OffsetAnimation {
        self.entrance.clone()
    }

    fn rebuild(&mut self) {
        self.absolute_start = absolute_starting_offset(self.relative_start, self.viewport_height);
        self.entrance = OffsetAnimation::new(
            ENTRANCE_START_OFFSET,
            self.absolute_start,
            self.duration_ms.max(0) as u32,
            self.easing,
        );
        tracing::trace!(
            "resting offset {} (relative {}, viewport {})",
            self.absolute_start,
            self.relative_start,
            self.viewport_height
        );
    }
}

/// `(1 - relative) * viewport_height`, rounded to the nearest pixel
pub fn absolute_starting_offset(relative_start: f32, viewport_height: i32) -> i32 {
    ((1.0 - relative_start as f64) * viewport_height as f64).round() as i32
}
