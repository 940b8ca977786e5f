//! Error types and handling
//!
//! This module contains the two error kinds of the layout generator:
//!
//! - [`PlacementError`]: a recoverable rejection returned by
//!   [`Site::add_facility`](crate::facility::Site::add_facility). It carries the
//!   failed check, the rejected facility and the cells that are currently
//!   viable, and is consumed by the generator to drive relocation.
//! - [`LayoutError`]: everything else, including the fatal
//!   [`LayoutError::ImpossibleSite`] raised when a facility cannot be placed
//!   anywhere.

use crate::facility::Facility;
use crate::geometry::GridCell;
use crate::types::PlacementCheck;
use thiserror::Error;

/// Errors that can occur while building a site
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Site dimensions are invalid
    #[error("Invalid site: {0}")]
    InvalidSite(String),

    /// Facility definition is invalid
    #[error("Invalid facility: {0}")]
    InvalidFacility(String),

    /// Exclusion zone lies outside the site
    #[error("Exclusion zone {cell} out of boundaries of {width} x {height} site")]
    ExclusionOutOfBounds {
        /// The offending cell
        cell: GridCell,
        /// Site width
        width: i64,
        /// Site height
        height: i64,
    },

    /// A facility could not be placed at its requested position nor at any
    /// candidate cell
    #[error("Failed to add facility {facility}")]
    ImpossibleSite {
        /// Name of the first facility that could not be placed
        facility: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LayoutError {
    /// Create an invalid site error
    pub fn invalid_site(msg: impl Into<String>) -> Self {
        Self::InvalidSite(msg.into())
    }

    /// Create an invalid facility error
    pub fn invalid_facility(msg: impl Into<String>) -> Self {
        Self::InvalidFacility(msg.into())
    }

    /// Create an impossible site error naming the facility that failed
    pub fn impossible_site(facility: impl Into<String>) -> Self {
        Self::ImpossibleSite { facility: facility.into() }
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Check if a caller could reasonably retry with different input
    ///
    /// An impossible site is deterministic for a given input, so retrying the
    /// same generation never helps.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LayoutError::InvalidSite(_) => false,
            LayoutError::InvalidFacility(_) => false,
            LayoutError::ExclusionOutOfBounds { .. } => false,
            LayoutError::ImpossibleSite { .. } => false,
            LayoutError::ConfigurationError(_) => false,
            LayoutError::IoError(_) => true,
            LayoutError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            LayoutError::InvalidSite(_) => "Site",
            LayoutError::InvalidFacility(_) => "Facility",
            LayoutError::ExclusionOutOfBounds { .. } => "Exclusion Zone",
            LayoutError::ImpossibleSite { .. } => "Generation",
            LayoutError::ConfigurationError(_) => "Configuration",
            LayoutError::IoError(_) => "IO",
            LayoutError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// A rejected facility insertion
///
/// Returned by value so the caller gets the rejected facility back without
/// cloning. `available_cells` is the exhaustive, row-major list of cells that
/// passed the occupancy, exclusion and bound checks at the time of rejection.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PlacementError {
    check: PlacementCheck,
    message: String,
    facility: Facility,
    available_cells: Vec<GridCell>,
}

impl PlacementError {
    /// Create a new placement error
    pub fn new(check: PlacementCheck, facility: Facility, available_cells: Vec<GridCell>) -> Self {
        let message = check.rejection_message(facility.name());
        Self { check, message, facility, available_cells }
    }

    /// The check that rejected the facility
    pub fn check(&self) -> PlacementCheck {
        self.check
    }

    /// Diagnostic message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rejected facility
    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Cells currently viable for a relocation attempt, in row-major order
    pub fn available_cells(&self) -> &[GridCell] {
        &self.available_cells
    }

    /// Split the error into the rejected facility and its candidate cells
    pub fn into_parts(self) -> (Facility, Vec<GridCell>) {
        (self.facility, self.available_cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let site_error = LayoutError::invalid_site("width must be positive");
        assert!(matches!(site_error, LayoutError::InvalidSite(_)));
        assert_eq!(site_error.to_string(), "Invalid site: width must be positive");

        let impossible = LayoutError::impossible_site("3");
        assert!(matches!(impossible, LayoutError::ImpossibleSite { .. }));
        assert_eq!(impossible.to_string(), "Failed to add facility 3");
    }

    #[test]
    fn test_exclusion_out_of_bounds_message() {
        let error =
            LayoutError::ExclusionOutOfBounds { cell: GridCell::new(6, 2), width: 5, height: 7 };
        assert_eq!(error.to_string(), "Exclusion zone (6, 2) out of boundaries of 5 x 7 site");
        assert_eq!(error.category(), "Exclusion Zone");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let layout_error: LayoutError = io_error.into();
        assert!(matches!(layout_error, LayoutError::IoError(_)));
        assert!(layout_error.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(LayoutError::invalid_site("x").category(), "Site");
        assert_eq!(LayoutError::invalid_facility("x").category(), "Facility");
        assert_eq!(LayoutError::impossible_site("x").category(), "Generation");
        assert_eq!(LayoutError::configuration_error("x").category(), "Configuration");
        assert!(!LayoutError::impossible_site("x").is_recoverable());
    }

    #[test]
    fn test_placement_error_parts() {
        let facility = Facility::new("Tank", 1, 1, 2, 2).unwrap();
        let cells = vec![GridCell::new(3, 1), GridCell::new(1, 3)];
        let error = PlacementError::new(PlacementCheck::Overlap, facility.clone(), cells.clone());

        assert_eq!(error.check(), PlacementCheck::Overlap);
        assert_eq!(error.to_string(), "Facility Tank overlaps with an existing facility");
        assert_eq!(error.message(), error.to_string());
        assert_eq!(error.available_cells(), cells.as_slice());

        let (returned, returned_cells) = error.into_parts();
        assert_eq!(returned, facility);
        assert_eq!(returned_cells, cells);
    }
}
