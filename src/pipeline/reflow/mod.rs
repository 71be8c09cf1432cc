//! Text reflow pipeline: configuration, orchestration, results and statistics.

mod config;
mod orchestration;
mod result;
mod stats;

pub use config::{ParallelPolicy, PipelineConfig};
pub use orchestration::{ProcessingStrategy, TextReflow, reconstruct_text};
pub use result::ReflowOutput;
pub use stats::ReflowStats;
