//! Error types for the reflow pipeline.

use crate::core::config::ConfigError;
use thiserror::Error;

/// Stage of the reflow pipeline an error is attributed to.
///
/// Reconstruction itself never fails, so only the stages that touch external
/// resources appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Execution of several independent inputs.
    BatchProcessing,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::BatchProcessing => write!(f, "batch processing"),
        }
    }
}

/// Errors that can occur around the reflow pipeline.
#[derive(Error, Debug)]
pub enum ReflowError {
    /// A raw detection whose polygon cannot be turned into a region descriptor.
    #[error("invalid geometry: {message}")]
    InvalidGeometry {
        /// A message describing the malformed polygon.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// A configuration value rejected by its validator.
    #[error(transparent)]
    ConfigValidation(#[from] ConfigError),

    /// Error occurred during processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// IO error while reading or writing a configuration file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
