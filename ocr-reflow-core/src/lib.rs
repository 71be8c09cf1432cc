//! # OCR Reflow Core
//!
//! Core types and algorithms for rebuilding readable text from unordered OCR
//! text regions.
//!
//! This crate provides:
//! - Error handling types
//! - Configuration and its validation
//! - Domain types (detections, region descriptors, lines, reconstructed text)
//! - The line grouping, line merging and assembly stages
//!
//! ## Modules
//!
//! * [`core`] - Configuration, constants, errors and validation helpers
//! * [`domain`] - Detections and the values derived from them
//! * [`processors`] - Geometry and the reflow stages

pub mod core;
pub mod domain;
pub mod processors;

// Re-export derive macros for convenient use
pub use ocr_reflow_derive::ConfigValidator;

/// Prelude module for convenient imports.
pub mod prelude {
    // Error Handling
    pub use crate::core::{ReflowError, ReflowResult};

    // Configuration
    pub use crate::core::{ConfigValidator, ReflowConfig};

    // Domain types
    pub use crate::domain::{Detection, LineBlock, ReconstructedText, RegionDescriptor};

    // Geometry types
    pub use crate::processors::{BoundingBox, Point};

    // Reflow stages
    pub use crate::processors::{LineGrouper, LineMerger, Separator, TextAssembler, reflow_regions};
}
