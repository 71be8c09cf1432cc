//! The reflow pipeline module.
//!
//! This module wires the reconstruction stages of `ocr-reflow-core` into a
//! configurable pipeline with batch processing, statistics and configuration
//! file support.

mod config;
pub mod reflow;

// Re-export the main pipeline components for easier access
pub use config::{ConfigFormat, ConfigLoader};
pub use reflow::{
    ParallelPolicy, PipelineConfig, ProcessingStrategy, ReflowOutput, ReflowStats, TextReflow,
    reconstruct_text,
};
