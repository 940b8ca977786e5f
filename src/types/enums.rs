//! Enumeration types for the layout generator
//!
//! This module contains the enumerations shared across the crate: the kinds of
//! placement checks a facility can fail, and the output formats of the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The hard constraints evaluated when a facility is added to a site, in the
/// order they are evaluated
///
/// The derived ordering follows evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlacementCheck {
    /// Facility edges must lie within the site boundary
    Boundary,
    /// Facility must not overlap a committed facility
    Overlap,
    /// Facility must not overlap an exclusion zone
    Exclusion,
    /// Center-to-corner distance bounds, checked in both directions
    Radius,
    /// Edge clearance bounds, checked in both directions
    Edge,
}

impl PlacementCheck {
    /// All checks in evaluation order
    pub const ALL: [PlacementCheck; 5] = [
        PlacementCheck::Boundary,
        PlacementCheck::Overlap,
        PlacementCheck::Exclusion,
        PlacementCheck::Radius,
        PlacementCheck::Edge,
    ];

    /// Human-readable rejection message for a facility that failed this check
    pub fn rejection_message(&self, facility_name: &str) -> String {
        match self {
            PlacementCheck::Boundary => format!("Facility {} is out of bounds", facility_name),
            PlacementCheck::Overlap => {
                format!("Facility {} overlaps with an existing facility", facility_name)
            }
            PlacementCheck::Exclusion => {
                format!("Facility {} is in an exclusion zone", facility_name)
            }
            PlacementCheck::Radius => format!(
                "Radius constraint broken when trying to add facility {}",
                facility_name
            ),
            PlacementCheck::Edge => format!(
                "Edge constraint broken when trying to add facility {}",
                facility_name
            ),
        }
    }
}

impl fmt::Display for PlacementCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementCheck::Boundary => write!(f, "Boundary"),
            PlacementCheck::Overlap => write!(f, "Overlap"),
            PlacementCheck::Exclusion => write!(f, "Exclusion"),
            PlacementCheck::Radius => write!(f, "Radius"),
            PlacementCheck::Edge => write!(f, "Edge"),
        }
    }
}

/// Output formats for a generated site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Framed text grid for humans
    Text,
    /// JSON document with facilities and exclusion zones
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
