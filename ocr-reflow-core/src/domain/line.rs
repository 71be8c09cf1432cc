//! Lines: regions judged to sit on the same printed text line.

use super::RegionDescriptor;

/// Regions grouped onto one printed line by vertical proximity.
///
/// A line is an intermediate value of the reflow pipeline. Its regions are in
/// grouping order (ascending `top`); reading order is only established when
/// the line is merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    regions: Vec<RegionDescriptor>,
}

impl Line {
    /// Starts a line with its first region.
    pub fn new(first: RegionDescriptor) -> Self {
        Self {
            regions: vec![first],
        }
    }

    /// Appends a region to the line.
    pub fn push(&mut self, region: RegionDescriptor) {
        self.regions.push(region);
    }

    /// The region most recently added to the line.
    pub fn last(&self) -> Option<&RegionDescriptor> {
        self.regions.last()
    }

    /// Regions of the line, in grouping order.
    pub fn regions(&self) -> &[RegionDescriptor] {
        &self.regions
    }

    /// Number of regions on the line.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the line holds no region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions sorted left to right.
    pub fn sorted_left_to_right(&self) -> Vec<&RegionDescriptor> {
        let mut sorted: Vec<&RegionDescriptor> = self.regions.iter().collect();
        sorted.sort_by(|a, b| a.cmp_horizontal(b));
        sorted
    }
}

impl From<Vec<RegionDescriptor>> for Line {
    fn from(regions: Vec<RegionDescriptor>) -> Self {
        Self { regions }
    }
}
