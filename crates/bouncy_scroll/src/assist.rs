//! Scroll assist
//!
//! Once scrolling stops, content that is mostly off screen is animated the
//! rest of the way off. The threshold is a fraction of the content height
//! measured in from either end of the scroll range; `0.0` only assists at
//! the very edges.

use bouncy_animation::{Easing, OffsetAnimation};

/// Direction to finish scrolling in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistTarget {
    /// Hide the content below the viewport (offset 0)
    Bottom,
    /// Hide the content above the viewport (max offset)
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAssist {
    pub enabled: bool,
    pub duration_ms: i32,
    pub threshold: f32,
}

impl ScrollAssist {
    pub fn new(enabled: bool, duration_ms: i32, threshold: f32) -> Self {
        Self {
            enabled,
            duration_ms,
            threshold,
        }
    }

    /// Decide whether the content at `offset` should be scrolled off screen
    pub fn decide(
        &self,
        offset: i32,
        content_height: i32,
        viewport_height: i32,
    ) -> Option<AssistTarget> {
        if !self.enabled {
            return None;
        }

        let bottom_threshold = (content_height as f32 * self.threshold) as i32;
        let top_threshold = viewport_height - bottom_threshold;

        let target = if offset <= bottom_threshold {
            Some(AssistTarget::Bottom)
        } else if offset >= top_threshold {
            Some(AssistTarget::Top)
        } else {
            None
        };

        tracing::debug!(
            "scroll assist at offset {}: thresholds=({}, {}) -> {:?}",
            offset,
            bottom_threshold,
            top_threshold,
            target
        );
        target
    }

    /// Build the animation that finishes the scroll
    pub fn animation(&self, from: i32, target: AssistTarget, max_offset: i32) -> OffsetAnimation {
        let to = match target {
            AssistTarget::Bottom => 0,
            AssistTarget::Top => max_offset,
        };
        OffsetAnimation::new(
            from,
            to,
            self.duration_ms.max(0) as u32,
            Easing::Accelerate(1.0),
        )
    }
}
