//! Grouping of region descriptors into text lines.
//!
//! Regions are sorted top to bottom and swept once. Each region joins the
//! current line when its `top` is within `avg_height * ratio` of the region
//! added to that line just before it, otherwise it opens a new line. Comparing
//! against the latest member rather than the first lets a line follow a slight
//! baseline drift across the page.

use crate::core::config::ReflowConfig;
use crate::core::constants::DEFAULT_LINE_GROUPING_RATIO;
use crate::domain::{Line, RegionDescriptor};
use tracing::debug;

/// Partitions region descriptors into lines by vertical proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGrouper {
    line_grouping_ratio: f32,
}

impl LineGrouper {
    /// Creates a grouper with the given height ratio.
    pub fn new(line_grouping_ratio: f32) -> Self {
        Self {
            line_grouping_ratio,
        }
    }

    /// Creates a grouper from the line grouping ratio of a [`ReflowConfig`].
    pub fn from_config(config: &ReflowConfig) -> Self {
        Self::new(config.line_grouping_ratio as f32)
    }

    /// Returns true if `curr` belongs to the same line as `prev`.
    ///
    /// With a zero average height the threshold is zero, so only regions with
    /// identical tops share a line.
    pub fn same_line(&self, prev: &RegionDescriptor, curr: &RegionDescriptor) -> bool {
        let avg_height = (prev.height() + curr.height()) / 2.0;
        let threshold = avg_height * self.line_grouping_ratio;
        (curr.top() - prev.top()).abs() <= threshold
    }

    /// Groups regions into lines ordered top to bottom.
    ///
    /// Empty input yields no line. The number of lines never exceeds the
    /// number of regions.
    pub fn group(&self, regions: &[RegionDescriptor]) -> Vec<Line> {
        let mut sorted = regions.to_vec();
        sorted.sort_by(|a, b| a.cmp_vertical(b));

        let mut iter = sorted.into_iter();
        let Some(first) = iter.next() else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        let mut current = Line::new(first);

        for region in iter {
            let joins = current
                .last()
                .is_some_and(|prev| self.same_line(prev, &region));

            if joins {
                current.push(region);
            } else {
                lines.push(std::mem::replace(&mut current, Line::new(region)));
            }
        }
        lines.push(current);

        debug!("Grouped {} regions into {} lines", regions.len(), lines.len());
        lines
    }
}

impl Default for LineGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_GROUPING_RATIO as f32)
    }
}
