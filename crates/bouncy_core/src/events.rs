//! Input and scroll events
//!
//! Raw touch lifecycle events as delivered by the host, and the payload of a
//! scroll-changed notification.

use smallvec::{smallvec, SmallVec};

use crate::geometry::Point;

/// Touch lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down
    Down,
    /// The finger moved while down
    Move,
    /// The finger was lifted
    Up,
    /// The gesture was taken away (e.g., system gesture)
    Cancel,
}

impl TouchPhase {
    /// Up and Cancel both end a gesture
    pub fn is_release(&self) -> bool {
        matches!(self, TouchPhase::Up | TouchPhase::Cancel)
    }
}

/// A single touch event in absolute screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// X coordinate in screen space
    pub x: f32,
    /// Y coordinate in screen space
    pub y: f32,
}

impl TouchEvent {
    pub const fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Down, x, y)
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Up, x, y)
    }

    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancel, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Down and Up at the same point, delivered as one batch
    pub fn tap(x: f32, y: f32) -> TouchBatch {
        smallvec![Self::down(x, y), Self::up(x, y)]
    }
}

/// Events delivered together in one dispatch pass.
///
/// A quick tap arrives as a Down immediately followed by an Up.
pub type TouchBatch = SmallVec<[TouchEvent; 2]>;

/// Vertical scroll offset change reported by the scroll surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChange {
    /// New offset in pixels
    pub offset: i32,
    /// Offset before the change
    pub previous_offset: i32,
}

impl ScrollChange {
    pub const fn new(offset: i32, previous_offset: i32) -> Self {
        Self {
            offset,
            previous_offset,
        }
    }

    /// Signed distance travelled (positive = content moved up)
    pub fn delta(&self) -> i32 {
        self.offset - self.previous_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_phases() {
        assert!(TouchPhase::Up.is_release());
        assert!(TouchPhase::Cancel.is_release());
        assert!(!TouchPhase::Down.is_release());
        assert!(!TouchPhase::Move.is_release());
    }

    #[test]
    fn test_tap_fits_inline() {
        let batch = TouchEvent::tap(1.0, 2.0);
        assert!(!batch.spilled());
        assert_eq!(batch[0].phase, TouchPhase::Down);
        assert_eq!(batch[1].position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_scroll_delta() {
        assert_eq!(ScrollChange::new(340, 300).delta(), 40);
    }
}
