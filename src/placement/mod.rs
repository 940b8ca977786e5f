//! Placement support: errors, progress events, statistics and logging
//!
//! This module contains everything the generator needs around the core
//! placement logic.
//!
//! # Overview
//!
//! - **LayoutError / PlacementError**: fatal and recoverable error kinds
//! - **PlacementEvent / PlacementObserver**: progress hooks for attempts,
//!   relocations, successes and failures
//! - **GenerationStatistics**: counters aggregated from placement events
//! - **LoggingConfig**: tracing subscriber setup for the binary
//!
//! # Usage Example
//!
//! ```rust
//! use site_layout::facility::{Facility, SiteGenerator};
//! use site_layout::placement::*;
//!
//! let facilities = vec![
//!     Facility::new("A", 1, 1, 1, 1).unwrap(),
//!     Facility::new("B", 1, 1, 1, 1).unwrap(),
//! ];
//!
//! let mut recorder = RecordingObserver::new();
//! let site = SiteGenerator::generate_with_observer(2, 1, &[], facilities, &mut recorder)?;
//! assert_eq!(site.facility_count(), 2);
//!
//! let stats = GenerationStatistics::from_events(recorder.events());
//! assert_eq!(stats.relocated, 1);
//! # Ok::<(), LayoutError>(())
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use events::*;
pub use logging::*;
pub use statistics::*;
