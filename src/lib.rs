//! # OCR Reflow
//!
//! A Rust library that rebuilds readable text from the unordered text regions
//! an OCR engine returns. Regions are grouped into lines by vertical
//! proximity, each line is read left to right, and the gap between
//! neighbouring regions decides whether they form one word, two words or two
//! separate fields.
//!
//! ## Features
//!
//! - Height-relative thresholds that work across font sizes and resolutions
//! - Per-line metadata: mean confidence, bounding box and region count
//! - Batch processing of independent inputs with rayon
//! - TOML and JSON configuration files
//!
//! ## Modules
//!
//! * [`core`] - Configuration, constants, error handling and tracing setup
//! * [`domain`] - Detections, region descriptors, lines and reconstructed text
//! * [`processors`] - Geometry and the individual reflow stages
//! * [`pipeline`] - The [`TextReflow`](pipeline::TextReflow) orchestrator
//!
//! ## Quick Start
//!
//! ```rust
//! use ocr_reflow::prelude::*;
//!
//! let detections = vec![
//!     Detection::new("le", 0.96, BoundingBox::from_coords(12.0, 10.0, 22.0, 30.0)),
//!     Detection::new("fi", 0.98, BoundingBox::from_coords(0.0, 10.0, 10.0, 30.0)),
//!     Detection::new("template", 0.93, BoundingBox::from_coords(60.0, 40.0, 135.0, 60.0)),
//!     Detection::new("CSV", 0.99, BoundingBox::from_coords(0.0, 40.0, 30.0, 60.0)),
//! ];
//!
//! assert_eq!(reconstruct_text(&detections), "file\nCSV  template");
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use ocr_reflow::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load_from_string(
//!     r#"
//! max_regions = 2000
//!
//! [reflow]
//! word_space_ratio = 1.5
//! skip_empty_regions = true
//! "#,
//!     ConfigFormat::Toml,
//! )?;
//!
//! let reflow = TextReflow::from_pipeline_config(&config)?;
//! assert!(reflow.reconstruct_detections(&[]).text.is_empty());
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod core;
pub mod pipeline;

pub use ocr_reflow_core::{domain, processors};

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use ocr_reflow::prelude::*;
/// ```
///
/// For the individual stages (`LineGrouper`, `LineMerger`, `TextAssembler`),
/// import directly from [`processors`](crate::processors).
pub mod prelude {
    // Pipeline (essential)
    pub use crate::pipeline::{
        ConfigFormat, ConfigLoader, ParallelPolicy, PipelineConfig, ProcessingStrategy,
        ReflowOutput, ReflowStats, TextReflow, reconstruct_text,
    };

    // Configuration
    pub use crate::core::{ConfigValidator, ReflowConfig};

    // Error Handling (essential)
    pub use crate::core::{ReflowError, ReflowResult};

    // Inputs and outputs
    pub use crate::domain::{Detection, LineBlock, ReconstructedText, RegionDescriptor};
    pub use crate::processors::{BoundingBox, Point};
}
