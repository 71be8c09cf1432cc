//! Configuration types and validation for the reflow pipeline.

pub mod errors;
pub mod reflow;

pub use errors::{ConfigError, ConfigValidator};
pub use reflow::ReflowConfig;
