//! The core module of the reflow pipeline.
//!
//! Re-exports the configuration, constants, errors and validation helpers of
//! `ocr-reflow-core`, and provides tracing initialization for applications.

pub use ocr_reflow_core::core::{config, constants, errors, validation};

pub use config::{ConfigError, ConfigValidator, ReflowConfig};
pub use constants::*;
pub use errors::{ProcessingStage, ReflowError, ReflowResult};

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// It's typically called at the start of an application to enable logging.
///
/// # Example
///
/// ```rust,no_run
/// ocr_reflow::core::init_tracing();
/// // RUST_LOG=ocr_reflow=debug now prints region and line counts.
/// ```
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
