//! Counters collected while reconstructing text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics of one reconstruction, or of a whole batch once merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowStats {
    /// Number of raw detections received.
    pub input_regions: usize,
    /// Detections dropped because their polygon could not be measured.
    pub rejected_regions: usize,
    /// Detections dropped because of the `max_regions` limit.
    pub truncated_regions: usize,
    /// Number of reconstructed lines.
    pub lines: usize,
}

impl ReflowStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detections that took part in the reconstruction.
    pub fn accepted_regions(&self) -> usize {
        self.input_regions
            .saturating_sub(self.rejected_regions)
            .saturating_sub(self.truncated_regions)
    }

    /// Returns the acceptance rate as a percentage (0.0 to 100.0).
    pub fn acceptance_rate(&self) -> f64 {
        if self.input_regions == 0 {
            0.0
        } else {
            (self.accepted_regions() as f64 / self.input_regions as f64) * 100.0
        }
    }

    /// Adds the counters of `other` to `self`.
    pub fn merge(&mut self, other: &ReflowStats) {
        self.input_regions += other.input_regions;
        self.rejected_regions += other.rejected_regions;
        self.truncated_regions += other.truncated_regions;
        self.lines += other.lines;
    }
}

impl fmt::Display for ReflowStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reflow Statistics:")?;
        writeln!(f, "  Input regions: {}", self.input_regions)?;
        writeln!(
            f,
            "  Accepted: {} ({:.1}%)",
            self.accepted_regions(),
            self.acceptance_rate()
        )?;
        writeln!(f, "  Rejected: {}", self.rejected_regions)?;
        writeln!(f, "  Truncated: {}", self.truncated_regions)?;
        writeln!(f, "  Lines: {}", self.lines)?;
        Ok(())
    }
}
