//! Output types of the reflow pipeline.

use crate::processors::{BoundingBox, TextAssembler};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reconstructed line together with the metadata of the regions it merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBlock {
    /// Merged text of the line.
    pub text: String,
    /// Mean recognition confidence of the merged regions.
    pub confidence: f32,
    /// Axis-aligned box covering every merged region.
    pub bounding_box: BoundingBox,
    /// Number of regions merged into this line.
    pub region_count: usize,
}

/// Text rebuilt from a set of detections: one block per line, top to bottom.
///
/// # Example
///
/// ```rust
/// use ocr_reflow_core::domain::{ReconstructedText, RegionDescriptor};
/// use ocr_reflow_core::processors::reflow_regions;
/// use ocr_reflow_core::core::ReflowConfig;
///
/// let regions = vec![
///     RegionDescriptor::new("fi", 10.0, 0.0, 10.0, 20.0),
///     RegionDescriptor::new("le", 10.0, 12.0, 22.0, 20.0),
/// ];
/// let text: ReconstructedText = reflow_regions(&regions, &ReflowConfig::default());
/// assert_eq!(text.to_text(), "file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedText {
    /// Lines in top-to-bottom order.
    pub blocks: Vec<LineBlock>,
}

impl ReconstructedText {
    /// Wraps already-merged line blocks.
    pub fn new(blocks: Vec<LineBlock>) -> Self {
        Self { blocks }
    }

    /// Merged line strings in top-to-bottom order.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(|block| block.text.as_str()).collect()
    }

    /// Number of reconstructed lines.
    pub fn line_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no line was reconstructed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Lines joined with a single newline, without a trailing newline.
    pub fn to_text(&self) -> String {
        TextAssembler::assemble(&self.lines())
    }

    /// Mean of the per-line confidences, or 0.0 when there are no lines.
    pub fn average_confidence(&self) -> f32 {
        if self.blocks.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.blocks.iter().map(|block| block.confidence).sum();
        sum / self.blocks.len() as f32
    }
}

impl fmt::Display for ReconstructedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
