//! Core types and configuration for the layout generator
//!
//! This module contains the shared enumerations and the configuration
//! structures used by the CLI and by scenario files.
//!
//! # Overview
//!
//! - **Enums**: placement checks and output formats
//! - **Configuration**: layout scenario configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use site_layout::types::*;
//!
//! // The default configuration is the 5 x 7 demonstration scenario
//! let config = LayoutConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
