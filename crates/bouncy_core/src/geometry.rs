//! Screen-space geometry
//!
//! All coordinates are absolute screen pixels, matching the raw pointer
//! coordinates delivered with touch events.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

/// 2D rectangle (top-left origin plus size)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Inclusive containment: points on the edge count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.bottom()
    }

    /// Exclusive containment: a point lying exactly on any edge is outside.
    ///
    /// This is the rule used for deciding whether a finger is "on" the
    /// content view.
    pub fn contains_exclusive(&self, point: Point) -> bool {
        point.x > self.origin.x
            && point.x < self.right()
            && point.y > self.origin.y
            && point.y < self.bottom()
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_edges_are_outside() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains_exclusive(Point::new(50.0, 40.0)));
        assert!(!rect.contains_exclusive(Point::new(10.0, 40.0)));
        assert!(!rect.contains_exclusive(Point::new(110.0, 40.0)));
        assert!(!rect.contains_exclusive(Point::new(50.0, 20.0)));
        assert!(!rect.contains_exclusive(Point::new(50.0, 70.0)));

        // Inclusive variant accepts the same edge points
        assert!(rect.contains(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains_exclusive(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_offset() {
        let rect = Rect::new(0.0, 100.0, 20.0, 20.0).offset(0.0, -40.0);
        assert_eq!(rect.y(), 60.0);
        assert_eq!(rect.bottom(), 80.0);
    }
}
