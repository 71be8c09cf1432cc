//! Configuration of the reflow pipeline.

use crate::core::config::{ConfigError, ConfigValidator, ReflowConfig};
use crate::core::constants::DEFAULT_BATCH_PARALLEL_THRESHOLD;
use ocr_reflow_core::ConfigValidator;
use serde::{Deserialize, Serialize};

/// Parallel processing behavior for batch reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ConfigValidator)]
pub struct ParallelPolicy {
    /// Maximum number of threads to use for parallel processing.
    /// If None, rayon's global pool is used (typically one thread per CPU core).
    /// Default: None
    #[serde(default)]
    #[validate(optional_range(min = 1, max = 1024))]
    pub max_threads: Option<usize>,

    /// Batches with at most this many inputs are processed sequentially.
    /// Default: 4
    #[serde(default = "ParallelPolicy::default_batch_threshold")]
    pub batch_threshold: usize,
}

impl ParallelPolicy {
    /// Create a new ParallelPolicy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of threads.
    pub fn with_max_threads(mut self, max_threads: Option<usize>) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Set the batch threshold.
    pub fn with_batch_threshold(mut self, threshold: usize) -> Self {
        self.batch_threshold = threshold;
        self
    }

    fn default_batch_threshold() -> usize {
        DEFAULT_BATCH_PARALLEL_THRESHOLD
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            max_threads: None,
            batch_threshold: Self::default_batch_threshold(),
        }
    }
}

/// Complete configuration of a [`TextReflow`](super::TextReflow) instance.
///
/// # Example
///
/// ```rust
/// use ocr_reflow::pipeline::{ParallelPolicy, PipelineConfig};
/// use ocr_reflow::core::config::{ConfigValidator, ReflowConfig};
///
/// let config = PipelineConfig::new()
///     .with_reflow(ReflowConfig::new().with_word_space_ratio(1.5))
///     .with_max_regions(Some(5_000))
///     .with_parallel(ParallelPolicy::new().with_max_threads(Some(2)));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ConfigValidator)]
#[validate(custom = "Self::validate_nested")]
pub struct PipelineConfig {
    /// Thresholds of the reconstruction algorithm.
    #[serde(default)]
    pub reflow: ReflowConfig,

    /// Upper bound on the number of detections reconstructed per input.
    /// Detections past the bound are dropped with a warning.
    /// Default: None (unbounded)
    #[serde(default)]
    pub max_regions: Option<usize>,

    /// Parallelism used by batch reconstruction.
    #[serde(default)]
    pub parallel: ParallelPolicy,
}

impl PipelineConfig {
    /// Create a new PipelineConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reflow thresholds.
    pub fn with_reflow(mut self, reflow: ReflowConfig) -> Self {
        self.reflow = reflow;
        self
    }

    /// Set the per-input region limit.
    pub fn with_max_regions(mut self, max_regions: Option<usize>) -> Self {
        self.max_regions = max_regions;
        self
    }

    /// Set the parallel policy.
    pub fn with_parallel(mut self, parallel: ParallelPolicy) -> Self {
        self.parallel = parallel;
        self
    }

    fn validate_nested(&self) -> Result<(), ConfigError> {
        self.reflow.validate()?;
        self.parallel.validate()?;
        if self.max_regions == Some(0) {
            return Err(ConfigError::InvalidConfig {
                message: "max_regions must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parallel.batch_threshold, 4);
        assert_eq!(config.max_regions, None);
    }

    #[test]
    fn test_rejects_zero_threads() {
        let config =
            PipelineConfig::new().with_parallel(ParallelPolicy::new().with_max_threads(Some(0)));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_max_regions() {
        let config = PipelineConfig::new().with_max_regions(Some(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_propagates_reflow_errors() {
        let config =
            PipelineConfig::new().with_reflow(ReflowConfig::new().with_line_grouping_ratio(-1.0));
        assert!(config.validate().is_err());
    }
}
