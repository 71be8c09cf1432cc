//! Core building blocks shared by every stage of the reflow pipeline:
//! configuration, constants, errors and input validation.

pub mod config;
pub mod constants;
pub mod errors;
pub mod validation;

pub use config::{ConfigError, ConfigValidator, ReflowConfig};
pub use constants::*;
pub use errors::{ProcessingStage, ReflowError, ReflowResult};
