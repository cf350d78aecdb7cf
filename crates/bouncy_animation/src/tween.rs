//! Offset tweens
//!
//! An [`OffsetAnimation`] moves an integer scroll offset from one value to
//! another over a fixed duration. Values are sampled on demand; the caller
//! advances time with [`OffsetAnimation::tick`] and writes [`value`] to the
//! animated property.
//!
//! [`value`]: OffsetAnimation::value

use crate::easing::Easing;

/// A timed animation of a single integer offset
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetAnimation {
    from: i32,
    to: i32,
    duration_ms: u32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl OffsetAnimation {
    pub fn new(from: i32, to: i32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            current_time: 0.0,
            playing: false,
        }
    }

    /// Rewind to the first frame and start playing.
    ///
    /// Zero-length animations are finished as soon as they start.
    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = self.duration_ms > 0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn from(&self) -> i32 {
        self.from
    }

    pub fn to(&self) -> i32 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress through the animation (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Get the current interpolated offset
    pub fn value(&self) -> i32 {
        let eased = self.easing.apply(self.progress());
        let value = self.from as f32 + (self.to - self.from) as f32 * eased;
        value.round() as i32
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }
}
