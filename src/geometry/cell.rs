//! Integer grid cells

use super::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit cell on the 1-indexed site grid, identified by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl GridCell {
    /// Create a new grid cell
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell's top-left corner as a point
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl From<(i64, i64)> for GridCell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
