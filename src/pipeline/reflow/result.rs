//! Result type of the reflow pipeline.

use super::ReflowStats;
use ocr_reflow_core::domain::ReconstructedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reconstructed text of one input together with its statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflowOutput {
    /// Reconstructed lines.
    pub text: ReconstructedText,
    /// Counters collected while reconstructing.
    pub stats: ReflowStats,
}

impl ReflowOutput {
    /// Assembled text, lines separated by a single newline.
    pub fn to_text(&self) -> String {
        self.text.to_text()
    }

    /// Mean line confidence, or 0.0 when nothing was reconstructed.
    pub fn average_confidence(&self) -> f32 {
        self.text.average_confidence()
    }
}

impl fmt::Display for ReflowOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}
