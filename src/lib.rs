//! Site Layout Generator
//!
//! Places rectangular facilities on a bounded grid site while honoring hard
//! geometric constraints, repairing rejected placements by moving them to the
//! first viable cell.
//!
//! # Overview
//!
//! A site is a `width x height` grid with 1-indexed cells. Facilities are
//! axis-aligned rectangles with an integer top-left origin. Each facility may
//! carry optional bounds on the distance to other facilities, measured either
//! from its center to their corners (radius bounds) or with its own bounding
//! box grown outward (edge bounds). Exclusion zones are single cells that no
//! facility may cover.
//!
//! ## Key Features
//!
//! - **Validation Pipeline**: boundary, overlap, exclusion, radius and edge
//!   checks run in a fixed order and stop at the first failure
//! - **Available-Cell Scan**: every rejection reports the cells a 1x1 facility
//!   could currently occupy
//! - **First-Fit Repair**: rejected facilities are retried at those cells in
//!   row-major order
//! - **Progress Hooks**: attempts, rejections, relocations, successes and
//!   failures are reported through an observer
//! - **Text and JSON Output**: a framed ASCII picture or a serialized site
//!
//! ## Quick Start
//!
//! ```rust
//! use site_layout::*;
//!
//! let config = LayoutConfig::default();
//! config.validate()?;
//!
//! let site = SiteGenerator::generate(
//!     config.width,
//!     config.height,
//!     &config.exclusion_zones,
//!     config.build_facilities()?,
//!     false,
//! )?;
//!
//! assert_eq!(site.facility_count(), 4);
//! println!("{}", site);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`geometry`]: Points, grid cells and rectangles
//! - [`facility`]: Facilities, constraints, the site registry and the generator
//! - [`placement`]: Errors, progress events, statistics and logging setup
//! - [`types`]: Shared enums and configuration
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod geometry;
pub mod placement;
pub mod types;

// Geometry primitives
pub use geometry::{GridCell, Point, Rect};

// Facilities and generation
pub use facility::{
    edges_compatible, radii_compatible, Bounds, ExclusionZone, Facility, Site, SiteGenerator,
};

// Errors, events and statistics
pub use placement::{
    GenerationStatistics, LayoutError, LayoutResult, LoggingConfig, NullObserver,
    PlacementError, PlacementEvent, PlacementObserver, RecordingObserver, TracingObserver,
};

// Enums and configuration
pub use types::{
    CliArgs, ConfigError, ConfigFile, ConfigValidationError, FacilitySpec, LayoutConfig,
    OutputFormat, PlacementCheck,
};
