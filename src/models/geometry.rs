//! Canvas geometry.
//!
//! Coordinates are real-valued canvas units (pixels), origin at the
//! top-left, y growing downwards. Only final drawing rounds.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point lies inside the rectangle.
    #[inline]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge or a corner do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Area of the overlap with another rectangle (0 if disjoint).
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }
}

/// Bounding size of a canvas, measured from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Extent {
    /// The empty extent.
    pub const ZERO: Extent = Extent {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new extent.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grows the extent so it encloses `rect`.
    pub fn include(&mut self, rect: &Rect) {
        self.width = self.width.max(rect.right());
        self.height = self.height.max(rect.bottom());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 150.0, 50.0);
        assert_eq!(r.right(), 160.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.area(), 7500.0);
        assert!(!r.is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 150.0, 50.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(1.0, 1.0));
        assert!(r.contains(149.9, 49.9));
        assert!(!r.contains(150.0, 10.0));
        assert!(!r.contains(10.0, 50.0));
        assert!(!r.contains(-1.0, 0.0));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 150.0, 50.0);
        let b = Rect::new(100.0, 25.0, 150.0, 50.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert_eq!(a.overlap_area(&b), 50.0 * 25.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 150.0, 50.0);
        let right = Rect::new(150.0, 0.0, 150.0, 50.0);
        let below = Rect::new(0.0, 50.0, 150.0, 50.0);
        let gap = Rect::new(151.0, 0.0, 150.0, 50.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&gap));
        assert_eq!(a.overlap_area(&right), 0.0);
    }

    #[test]
    fn test_empty_never_intersects() {
        let a = Rect::new(0.0, 0.0, 150.0, 50.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_extent_include() {
        let mut extent = Extent::ZERO;
        extent.include(&Rect::new(0.0, 0.0, 150.0, 50.0));
        extent.include(&Rect::new(151.0, 50.0, 100.0, 100.0));
        assert_eq!(extent, Extent::new(251.0, 150.0));
    }
}
