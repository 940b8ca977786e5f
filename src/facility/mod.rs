//! Facilities, the site registry and the generator
//!
//! This module holds the placement model and the algorithms that operate on
//! it.
//!
//! # Overview
//!
//! - **Facility**: a named rectangle with optional radius and edge bounds
//! - **Constraints**: pairwise bound predicates, checked in both directions
//! - **Site**: the registry of committed facilities and exclusion zones, with
//!   the validation pipeline and the available-cell scan
//! - **SiteGenerator**: greedy insertion with first-fit repair
//! - **Rendering**: the textual picture of a site
//!
//! # Usage Example
//!
//! ```rust
//! use site_layout::facility::*;
//!
//! let facilities = vec![
//!     Facility::new("Silo", 1, 1, 2, 1)?
//!         .with_bounds(Bounds::new().with_min_edge_bound(1.0))?,
//!     Facility::new("Barn", 1, 2, 1, 1)?,
//! ];
//!
//! let site = SiteGenerator::generate(4, 3, &[(4, 3)], facilities, false)?;
//! assert_eq!(site.facility_count(), 2);
//!
//! // The barn is moved to the first cell clear of the silo's edge margin
//! let barn = &site.facilities()[1];
//! assert_eq!((barn.left_x(), barn.top_y()), (4, 1));
//! # Ok::<(), site_layout::placement::LayoutError>(())
//! ```

pub mod constraints;
pub mod facility;
pub mod generator;
pub mod registry;
pub mod render;

// Re-export all public types for convenience
pub use constraints::{edges_compatible, radii_compatible};
pub use facility::{Bounds, Facility};
pub use generator::SiteGenerator;
pub use registry::{ExclusionZone, Site};
