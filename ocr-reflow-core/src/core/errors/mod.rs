//! Error types for the reflow pipeline.
//!
//! The reconstruction algorithm itself never fails. Errors only surface at the
//! edges of the pipeline: turning raw detections into region descriptors,
//! validating and loading configuration, and setting up batch execution.
//!
//! # Usage
//!
//! ```rust
//! use ocr_reflow_core::core::errors::{ProcessingStage, ReflowError};
//!
//! let geometry_error = ReflowError::invalid_geometry("polygon has 1 point, need at least 2");
//!
//! let config_error = ReflowError::config_error("word_space_ratio must be finite");
//!
//! let batch_error = ReflowError::processing(
//!     ProcessingStage::BatchProcessing,
//!     "failed to build thread pool",
//!     std::io::Error::other("no threads"),
//! );
//! ```

pub mod constructors;
pub mod types;

pub use types::{ProcessingStage, ReflowError};

/// Convenient result alias for reflow operations.
pub type ReflowResult<T> = Result<T, ReflowError>;
