//! Geometry primitives shared by the layout and the card model.
//!
//! Coordinates are logical pixels with the origin at the top-left corner.
//! Right and bottom edges are exclusive: a rect at `x = 10` with `width = 5`
//! covers `10..15`.

use serde::{Deserialize, Serialize};

/// A rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A rect at the origin with the given width and unbounded height.
    ///
    /// Height-for-width queries lay out against this rect.
    #[inline]
    pub fn with_width(width: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height: f32::INFINITY,
        }
    }

    /// Get the right edge X coordinate (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if this rectangle intersects with another.
    ///
    /// Rects that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum of two sizes.
    #[inline]
    pub fn expanded_to(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grow both dimensions by `amount`.
    #[inline]
    pub fn grown_by(self, amount: f32) -> Size {
        Size {
            width: self.width + amount,
            height: self.height + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_exclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_adjacent_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 60.0, 20.0);
        let b = Rect::new(60.0, 0.0, 60.0, 20.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(59.0, 19.0, 5.0, 5.0)));
    }

    #[test]
    fn test_size_expanded_to_is_componentwise() {
        let a = Size::new(450.0, 100.0);
        let b = Size::new(200.0, 300.0);
        assert_eq!(a.expanded_to(b), Size::new(450.0, 300.0));
        assert_eq!(Size::ZERO.grown_by(30.0), Size::new(30.0, 30.0));
    }

    #[test]
    fn test_width_rect_has_unbounded_height() {
        let rect = Rect::with_width(100.0);
        assert_eq!((rect.x, rect.y, rect.right()), (0.0, 0.0, 100.0));
        assert!(rect.height.is_infinite());
    }
}
