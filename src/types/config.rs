//! Configuration structures for the layout generator
//!
//! This module contains the layout scenario configuration, its JSON file
//! representation, the command line interface and the validation logic that
//! runs before any facility is placed.

use super::OutputFormat;
use crate::facility::{Bounds, Facility};
use crate::placement::error::LayoutResult;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site-layout",
    version = "0.1.0",
    about = "Site Layout Generator - Places facilities on a grid site under hard constraints",
    long_about = "Places rectangular facilities on a bounded grid site, honoring site boundaries, exclusion zones, non-overlap and pairwise radius and edge bounds. Facilities are inserted in order; a rejected facility is moved to the first viable cell, and the run fails if no cell works.

EXAMPLES:
    # Run the built-in 5 x 7 demonstration scenario
    site-layout

    # Use a scenario file
    site-layout --config scenario.json

    # Override the site and its exclusion zones
    site-layout --config scenario.json --width 8 --height 8 --exclude 1,1 --exclude 2,1

    # Run a scenario without any exclusion zones
    site-layout --config scenario.json --no-exclusions

    # Generate a scenario template
    site-layout --print-config > my-scenario.json

    # Validate a scenario without running
    site-layout --config my-scenario.json --dry-run

    # Show every attempt, rejection and relocation
    site-layout --verbose

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON scenario file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Site width in cells
    #[arg(long, help = "Site width in cells", long_help = "Site width in cells. Must be greater than 0. Default: 5")]
    pub width: Option<i64>,

    /// Site height in cells
    #[arg(long, help = "Site height in cells", long_help = "Site height in cells. Must be greater than 0. Default: 7")]
    pub height: Option<i64>,

    /// Exclusion zone cells, replacing those from the configuration
    #[arg(
        long = "exclude",
        value_name = "X,Y",
        value_parser = parse_cell,
        help = "Exclusion zone cell (repeatable)",
        long_help = "Top-left corner of a 1 x 1 exclusion zone, written as X,Y. May be repeated. When given, replaces the exclusion zones of the configuration."
    )]
    pub exclude: Vec<(i64, i64)>,

    /// Drop the configured exclusion zones
    #[arg(
        long,
        help = "Drop all configured exclusion zones",
        long_help = "Start from an empty exclusion zone list. Cells given with --exclude are still added."
    )]
    pub no_exclusions: bool,

    /// Output format for the generated site
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the generated site. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Directory for daily rolling JSON log files
    #[arg(long, help = "Also write JSON logs to this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without placing facilities
    #[arg(long, help = "Validate configuration without placing facilities")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Parse an `X,Y` cell argument
pub fn parse_cell(value: &str) -> Result<(i64, i64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;

    let x = x.trim().parse::<i64>().map_err(|e| format!("invalid x in '{}': {}", value, e))?;
    let y = y.trim().parse::<i64>().map_err(|e| format!("invalid y in '{}': {}", value, e))?;
    Ok((x, y))
}

/// A facility as written in a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySpec {
    /// Facility name; its first character labels the facility in the grid
    pub name: String,
    /// Requested left edge
    pub x: i64,
    /// Requested top edge
    pub y: i64,
    /// Width in cells
    pub width: i64,
    /// Height in cells
    pub height: i64,
    /// Optional distance bounds
    #[serde(default, skip_serializing_if = "Bounds::is_unconstrained")]
    pub bounds: Bounds,
}

impl FacilitySpec {
    /// Create an unbounded facility description
    pub fn new(name: impl Into<String>, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { name: name.into(), x, y, width, height, bounds: Bounds::default() }
    }

    /// Attach distance bounds
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Build the facility this entry describes
    pub fn to_facility(&self) -> LayoutResult<Facility> {
        Facility::new(self.name.clone(), self.x, self.y, self.width, self.height)?
            .with_bounds(self.bounds)
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Site width in cells
    pub width: Option<i64>,

    /// Site height in cells
    pub height: Option<i64>,

    /// Exclusion zone cells as `[x, y]` pairs
    pub exclusion_zones: Option<Vec<(i64, i64)>>,

    /// Facilities in insertion order
    pub facilities: Option<Vec<FacilitySpec>>,

    /// Output format for the generated site
    pub output_format: Option<String>,
}

/// Configuration for a layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Site width in cells
    pub width: i64,

    /// Site height in cells
    pub height: i64,

    /// Exclusion zone cells as `[x, y]` pairs
    pub exclusion_zones: Vec<(i64, i64)>,

    /// Facilities in insertion order
    pub facilities: Vec<FacilitySpec>,

    /// Output format for the generated site
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for layout configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Site dimensions are invalid
    #[error("Site dimensions must be greater than 0, got {0} x {1}")]
    InvalidSiteDimensions(i64, i64),

    /// Exclusion cell lies outside the site
    #[error("Exclusion zone ({x}, {y}) out of boundaries of {width} x {height} site")]
    ExclusionOutOfBounds {
        /// Cell column
        x: i64,
        /// Cell row
        y: i64,
        /// Site width
        width: i64,
        /// Site height
        height: i64,
    },

    /// Facility has an empty name
    #[error("Facility at position {0} has an empty name")]
    EmptyFacilityName(usize),

    /// Facility dimensions are invalid
    #[error("Facility {name} must have positive dimensions, got {width} x {height}")]
    InvalidFacilityDimensions {
        /// Facility name
        name: String,
        /// Configured width
        width: i64,
        /// Configured height
        height: i64,
    },

    /// Facility bounds are invalid
    #[error("Invalid bounds for facility {name}: {reason}")]
    InvalidBounds {
        /// Facility name
        name: String,
        /// What is wrong with the bounds
        reason: String,
    },

    /// Output format is not recognized
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let anchor_bounds = Bounds::new().with_min_radius(1.0).with_max_radius(3.0);

        Self {
            width: 5,
            height: 7,
            exclusion_zones: vec![(5, 6), (2, 7), (3, 7), (4, 7), (5, 7)],
            facilities: vec![
                FacilitySpec::new("1", 3, 3, 2, 1).with_bounds(anchor_bounds),
                FacilitySpec::new("2", 3, 5, 1, 2),
                FacilitySpec::new("3", 5, 6, 2, 1),
                FacilitySpec::new("4", 4, 2, 1, 1),
            ],
            output_format: "text".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    ///
    /// Only the site dimensions and the output format fall back to the
    /// defaults. A file without `exclusion_zones` or `facilities` describes a
    /// site with none.
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            width: config_file.width.unwrap_or(defaults.width),
            height: config_file.height.unwrap_or(defaults.height),
            exclusion_zones: config_file.exclusion_zones.unwrap_or_default(),
            facilities: config_file.facilities.unwrap_or_default(),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.width {
            config.width = value;
        }
        if let Some(value) = args.height {
            config.height = value;
        }
        if args.no_exclusions {
            config.exclusion_zones.clear();
        }
        if !args.exclude.is_empty() {
            config.exclusion_zones = args.exclude;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Facilities that are valid but cannot be placed are not detected here;
    /// that only shows up when the layout is generated.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigValidationError::InvalidSiteDimensions(self.width, self.height));
        }

        for &(x, y) in &self.exclusion_zones {
            if !(0..=self.width).contains(&x) || !(0..=self.height).contains(&y) {
                return Err(ConfigValidationError::ExclusionOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        for (index, spec) in self.facilities.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(ConfigValidationError::EmptyFacilityName(index));
            }
            if spec.width <= 0 || spec.height <= 0 {
                return Err(ConfigValidationError::InvalidFacilityDimensions {
                    name: spec.name.clone(),
                    width: spec.width,
                    height: spec.height,
                });
            }
            spec.bounds.validate().map_err(|reason| ConfigValidationError::InvalidBounds {
                name: spec.name.clone(),
                reason,
            })?;
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Build the facilities in insertion order
    pub fn build_facilities(&self) -> LayoutResult<Vec<Facility>> {
        self.facilities.iter().map(FacilitySpec::to_facility).collect()
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
