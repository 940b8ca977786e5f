//! Geometry primitives
//!
//! This module contains the point and axis-aligned rectangle types that every
//! constraint in the crate is built from.
//!
//! # Overview
//!
//! - **GridCell**: an integer cell on the 1-indexed site grid
//! - **Point**: an immutable `(x, y)` pair of reals with Euclidean distance
//! - **Rect**: an axis-aligned rectangle with half-open containment and strict
//!   overlap semantics, so that rectangles tile a grid without double counting
//!   shared edges or corners
//!
//! # Usage Example
//!
//! ```rust
//! use site_layout::geometry::{Point, Rect};
//!
//! let a = Rect::new(1.0, 1.0, 2.0, 1.0);
//! let b = Rect::new(3.0, 1.0, 1.0, 1.0);
//!
//! // Touching edges do not overlap
//! assert!(!a.overlaps(&b));
//! assert!(a.contains_point(&Point::new(1.0, 1.0)));
//! assert!(!a.contains_point(&Point::new(3.0, 1.0)));
//! ```

pub mod cell;
pub mod point;
pub mod rect;

pub use cell::GridCell;
pub use point::Point;
pub use rect::Rect;
