//! Orchestration of the reflow pipeline over single inputs and batches.
//!
//! [`TextReflow`] chains the stages of `ocr-reflow-core`:
//! detections are measured into region descriptors, grouped into lines,
//! merged left to right and assembled top to bottom. Reconstruction itself
//! never fails. Detections whose polygon cannot be measured are dropped with a
//! warning and reported in [`ReflowStats`].
//!
//! Batches are independent inputs (for example the detections of several
//! images). [`ProcessingStrategy`] decides between a sequential loop and a
//! rayon `par_iter`; results are always returned in input order.

use super::{PipelineConfig, ReflowOutput, ReflowStats};
use crate::core::config::{ConfigValidator, ReflowConfig};
use crate::core::errors::{ReflowError, ReflowResult};
use ocr_reflow_core::domain::{Detection, ReconstructedText, RegionDescriptor};
use ocr_reflow_core::processors::reflow_regions;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Strategy for processing multiple inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStrategy {
    /// Always process sequentially
    Sequential,
    /// Always process in parallel
    Parallel,
    /// Automatically decide based on threshold
    Auto(usize),
}

impl ProcessingStrategy {
    /// Determine if parallel processing should be used for the given item count
    pub fn should_use_parallel(&self, item_count: usize) -> bool {
        match self {
            ProcessingStrategy::Sequential => false,
            ProcessingStrategy::Parallel => true,
            ProcessingStrategy::Auto(threshold) => item_count > *threshold,
        }
    }
}

/// Rebuilds readable text from unordered OCR detections.
///
/// # Example
///
/// ```rust
/// use ocr_reflow::prelude::*;
///
/// let reflow = TextReflow::default();
/// let detections = vec![
///     Detection::new("template", 0.91, BoundingBox::from_coords(45.0, 5.0, 120.0, 25.0)),
///     Detection::new("CSV", 0.97, BoundingBox::from_coords(0.0, 5.0, 30.0, 25.0)),
/// ];
///
/// let output = reflow.reconstruct_detections(&detections);
/// assert_eq!(output.to_text(), "CSV template");
/// assert_eq!(output.stats.lines, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextReflow {
    config: PipelineConfig,
    thread_pool: Option<Arc<rayon::ThreadPool>>,
}

impl TextReflow {
    /// Creates a reflow pipeline with the given thresholds and default
    /// pipeline settings.
    ///
    /// The thresholds are not validated: unlike [`from_pipeline_config`],
    /// this constructor accepts negative, non-finite or inverted ratios and
    /// reconstructs with them as given. Call
    /// [`ConfigValidator::validate`] first when the values come from
    /// untrusted input.
    ///
    /// [`from_pipeline_config`]: TextReflow::from_pipeline_config
    /// [`ConfigValidator::validate`]: crate::core::ConfigValidator::validate
    pub fn new(reflow: ReflowConfig) -> Self {
        Self {
            config: PipelineConfig::new().with_reflow(reflow),
            thread_pool: None,
        }
    }

    /// Creates a reflow pipeline from a complete configuration.
    ///
    /// The configuration is validated first. When
    /// [`ParallelPolicy::max_threads`](super::ParallelPolicy::max_threads) is
    /// set, a dedicated rayon pool with that many threads is built and used
    /// for every parallel batch of this instance.
    pub fn from_pipeline_config(config: &PipelineConfig) -> ReflowResult<Self> {
        config.validate()?;

        let thread_pool = match config.parallel.max_threads {
            Some(num_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|index| format!("ocr-reflow-{index}"))
                    .build()
                    .map_err(|e| {
                        ReflowError::batch_processing("failed to build reflow thread pool", e)
                    })?;
                debug!("Built reflow thread pool with {} threads", num_threads);
                Some(Arc::new(pool))
            }
            None => None,
        };

        Ok(Self {
            config: config.clone(),
            thread_pool,
        })
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The thresholds of the reconstruction algorithm.
    pub fn reflow_config(&self) -> &ReflowConfig {
        &self.config.reflow
    }

    /// Strategy derived from the configured batch threshold.
    pub fn default_strategy(&self) -> ProcessingStrategy {
        ProcessingStrategy::Auto(self.config.parallel.batch_threshold)
    }

    /// Reconstructs text from already-measured region descriptors.
    ///
    /// The result depends only on the set of descriptors, never on their
    /// order in `regions`.
    pub fn reconstruct(&self, regions: &[RegionDescriptor]) -> ReconstructedText {
        reflow_regions(regions, &self.config.reflow)
    }

    /// Reconstructs text from raw detections.
    ///
    /// Detections with fewer than three polygon points or non-finite coordinates
    /// are skipped. When `max_regions` is set only the first `max_regions`
    /// measurable detections are kept.
    pub fn reconstruct_detections(&self, detections: &[Detection]) -> ReflowOutput {
        let mut stats = ReflowStats {
            input_regions: detections.len(),
            ..ReflowStats::default()
        };

        let mut regions: Vec<RegionDescriptor> = detections
            .iter()
            .enumerate()
            .filter_map(|(index, detection)| {
                match RegionDescriptor::try_from_detection(detection) {
                    Ok(region) => Some(region),
                    Err(err) => {
                        warn!("Skipping detection {} ({:?}): {}", index, detection.text, err);
                        None
                    }
                }
            })
            .collect();
        stats.rejected_regions = detections.len() - regions.len();

        if let Some(limit) = self.config.max_regions
            && regions.len() > limit
        {
            warn!(
                "Truncating {} regions to the configured limit of {}",
                regions.len(),
                limit
            );
            stats.truncated_regions = regions.len() - limit;
            regions.truncate(limit);
        }

        let text = self.reconstruct(&regions);
        stats.lines = text.line_count();

        ReflowOutput { text, stats }
    }

    /// Reconstructs several independent inputs.
    ///
    /// Results are returned in the order of `inputs`, whichever strategy runs
    /// them.
    pub fn reconstruct_batch(
        &self,
        inputs: &[Vec<Detection>],
        strategy: ProcessingStrategy,
    ) -> Vec<ReflowOutput> {
        let outputs: Vec<ReflowOutput> = if strategy.should_use_parallel(inputs.len()) {
            debug!("Using parallel processing for {} inputs", inputs.len());
            let run = || {
                inputs
                    .par_iter()
                    .map(|detections| self.reconstruct_detections(detections))
                    .collect::<Vec<_>>()
            };
            match &self.thread_pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        } else {
            debug!("Using sequential processing for {} inputs", inputs.len());
            inputs
                .iter()
                .map(|detections| self.reconstruct_detections(detections))
                .collect()
        };

        let mut total = ReflowStats::new();
        for output in &outputs {
            total.merge(&output.stats);
        }
        info!(
            "Reflow completed for {} inputs: {} regions into {} lines",
            outputs.len(),
            total.accepted_regions(),
            total.lines
        );

        outputs
    }
}

/// Reconstructs text from raw detections with the default thresholds.
///
/// # Example
///
/// ```rust
/// use ocr_reflow::prelude::*;
///
/// let detections = Detection::from_parallel(
///     ["le", "fi", "Price"],
///     [0.9, 0.95, 0.99],
///     [
///         BoundingBox::from_coords(12.0, 10.0, 22.0, 30.0),
///         BoundingBox::from_coords(0.0, 10.0, 10.0, 30.0),
///         BoundingBox::from_coords(0.0, 60.0, 50.0, 80.0),
///     ],
/// );
/// assert_eq!(reconstruct_text(&detections), "file\nPrice");
/// ```
pub fn reconstruct_text(detections: &[Detection]) -> String {
    TextReflow::default()
        .reconstruct_detections(detections)
        .to_text()
}
