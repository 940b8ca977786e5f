//! Facility definitions
//!
//! This module contains the Facility struct, an immutable named rectangle on
//! the integer grid, together with its optional distance bounds.

use crate::geometry::{Point, Rect};
use crate::placement::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional distance bounds carried by a facility
///
/// Each bound is independently unset. Radius bounds are measured from the
/// owning facility's center to the other facility's corners; edge bounds are
/// measured with a bounding box grown outward from the owning facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Nearest corner of another facility must be at least this far from the center
    pub min_radius: Option<f64>,
    /// Farthest corner of another facility must be at most this far from the center
    pub max_radius: Option<f64>,
    /// Another facility must stay outside the box grown by this much
    pub min_edge_bound: Option<f64>,
    /// Another facility must reach into the box grown by this much
    pub max_edge_bound: Option<f64>,
}

impl Bounds {
    /// No bounds set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum radius
    pub fn with_min_radius(mut self, radius: f64) -> Self {
        self.min_radius = Some(radius);
        self
    }

    /// Set the maximum radius
    pub fn with_max_radius(mut self, radius: f64) -> Self {
        self.max_radius = Some(radius);
        self
    }

    /// Set the minimum edge bound
    pub fn with_min_edge_bound(mut self, bound: f64) -> Self {
        self.min_edge_bound = Some(bound);
        self
    }

    /// Set the maximum edge bound
    pub fn with_max_edge_bound(mut self, bound: f64) -> Self {
        self.max_edge_bound = Some(bound);
        self
    }

    /// True if no bound is set
    pub fn is_unconstrained(&self) -> bool {
        self.min_radius.is_none()
            && self.max_radius.is_none()
            && self.min_edge_bound.is_none()
            && self.max_edge_bound.is_none()
    }

    /// Validate that every set bound is a finite, non-negative number
    ///
    /// `min <= max` is deliberately not checked.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_edge_bound", self.min_edge_bound),
            ("max_edge_bound", self.max_edge_bound),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(format!("{} must be a non-negative number, got {}", field, value));
                }
            }
        }

        Ok(())
    }
}

/// A rectangular facility with an integer origin and positive integer extents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    name: String,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    bounds: Bounds,
}

impl Facility {
    /// Create a new unbounded facility with its top-left corner at `(x, y)`
    pub fn new(
        name: impl Into<String>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> LayoutResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(LayoutError::invalid_facility("facility name must not be empty"));
        }
        if width <= 0 || height <= 0 {
            return Err(LayoutError::invalid_facility(format!(
                "facility {} must have positive dimensions, got {} x {}",
                name, width, height
            )));
        }

        Ok(Self { name, x, y, width, height, bounds: Bounds::default() })
    }

    /// Attach distance bounds, consuming the facility
    pub fn with_bounds(mut self, bounds: Bounds) -> LayoutResult<Self> {
        bounds
            .validate()
            .map_err(|e| LayoutError::invalid_facility(format!("facility {}: {}", self.name, e)))?;
        self.bounds = bounds;
        Ok(self)
    }

    /// A copy of this facility with its top-left corner moved to `(x, y)`
    ///
    /// Name, dimensions and bounds are carried over unchanged.
    pub fn relocated(&self, x: i64, y: i64) -> Self {
        Self {
            name: self.name.clone(),
            x,
            y,
            width: self.width,
            height: self.height,
            bounds: self.bounds,
        }
    }

    /// An unbounded 1x1 facility standing in for a single grid cell
    pub(crate) fn unit_cell(x: i64, y: i64) -> Self {
        Self { name: "cell".to_string(), x, y, width: 1, height: 1, bounds: Bounds::default() }
    }

    /// Facility name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Single character shown for this facility in a rendered grid
    pub fn symbol(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Left edge
    pub fn left_x(&self) -> i64 {
        self.x
    }

    /// Right edge (`left_x + width`)
    pub fn right_x(&self) -> i64 {
        self.x + self.width
    }

    /// Top edge
    pub fn top_y(&self) -> i64 {
        self.y
    }

    /// Bottom edge (`top_y + height`)
    pub fn btm_y(&self) -> i64 {
        self.y + self.height
    }

    /// Width
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Height
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Distance bounds
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The facility footprint as a rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.x as f64, self.y as f64, self.width as f64, self.height as f64)
    }

    /// All four corners
    pub fn corners(&self) -> [Point; 4] {
        self.rect().corners()
    }

    /// Geometric center
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Half-open containment test
    pub fn contains_point(&self, point: &Point) -> bool {
        self.rect().contains_point(point)
    }

    /// Strict overlap test against another facility
    pub fn overlaps(&self, other: &Facility) -> bool {
        self.rect().overlaps(&other.rect())
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Facility {} at ({}, {}) with dimensions {} x {}",
            self.name, self.x, self.y, self.width, self.height
        )
    }
}
