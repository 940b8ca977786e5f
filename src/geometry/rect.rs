//! Axis-aligned rectangles
//!
//! Containment is half-open: a point on the right or bottom edge is outside.
//! Overlap is strict: rectangles that only share an edge or a corner do not
//! overlap.

use super::Point;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and extents
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Right edge (`left + width`)
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`)
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top-left corner
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Top-right corner
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top)
    }

    /// Bottom-left corner
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// All four corners, clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }

    /// Geometric center
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Half-open containment test
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// Strict interval intersection on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Grow the rectangle outward by `margin` on all four sides
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}
