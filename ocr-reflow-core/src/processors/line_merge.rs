//! Left-to-right ordering and spacing of the regions on one line.
//!
//! Every gap between neighbouring regions is measured relative to their
//! average height, which stands in for the font size:
//!
//! | gap                                   | separator |
//! |---------------------------------------|-----------|
//! | `gap < h * word_merge_ratio`          | none      |
//! | `gap < h * word_space_ratio`          | `" "`     |
//! | otherwise                             | `"  "`    |
//!
//! When the average height is not positive both thresholds collapse to zero.
//! Instead of comparing against them, touching or overlapping regions
//! (`gap <= 0`) are joined and every other pair gets a single space.

use crate::core::config::ReflowConfig;
use crate::core::constants::{DEFAULT_WORD_MERGE_RATIO, DEFAULT_WORD_SPACE_RATIO};
use crate::domain::{Line, LineBlock, RegionDescriptor};
use crate::processors::BoundingBox;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What goes between two neighbouring regions of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// Same word split across two detections.
    None,
    /// Ordinary word boundary.
    Space,
    /// Visually distinct separation, such as columns within one line.
    DoubleSpace,
}

impl Separator {
    /// The literal text inserted for this separator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Space => " ",
            Separator::DoubleSpace => "  ",
        }
    }
}

/// Orders the regions of a line and joins them with height-relative spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMerger {
    word_merge_ratio: f32,
    word_space_ratio: f32,
}

impl LineMerger {
    /// Creates a merger with explicit ratios.
    pub fn new(word_merge_ratio: f32, word_space_ratio: f32) -> Self {
        Self {
            word_merge_ratio,
            word_space_ratio,
        }
    }

    /// Creates a merger from the word ratios of a [`ReflowConfig`].
    pub fn from_config(config: &ReflowConfig) -> Self {
        Self::new(
            config.word_merge_ratio as f32,
            config.word_space_ratio as f32,
        )
    }

    /// Classifies a horizontal gap given the average height of its two regions.
    pub fn classify_gap(&self, gap: f32, avg_height: f32) -> Separator {
        if !(avg_height > 0.0 && avg_height.is_finite()) {
            return if gap <= 0.0 {
                Separator::None
            } else {
                Separator::Space
            };
        }

        if gap < avg_height * self.word_merge_ratio {
            Separator::None
        } else if gap < avg_height * self.word_space_ratio {
            Separator::Space
        } else {
            Separator::DoubleSpace
        }
    }

    /// Separator between `prev` and the region `curr` immediately to its right.
    pub fn separator_between(&self, prev: &RegionDescriptor, curr: &RegionDescriptor) -> Separator {
        let gap = curr.left() - prev.right();
        let avg_height = (prev.height() + curr.height()) / 2.0;
        let separator = self.classify_gap(gap, avg_height);
        trace!(
            "gap {:.2} (avg height {:.2}) between {:?} and {:?}: {:?}",
            gap,
            avg_height,
            prev.text(),
            curr.text(),
            separator
        );
        separator
    }

    /// Merges the regions of a line into one string, left to right.
    ///
    /// Each gap is measured against the immediately preceding region, not
    /// the first region of the line.
    pub fn merge_line(&self, line: &Line) -> String {
        let sorted = line.sorted_left_to_right();
        let Some(first) = sorted.first() else {
            return String::new();
        };

        let mut text = String::from(first.text());
        for (prev, curr) in sorted.iter().tuple_windows() {
            text.push_str(self.separator_between(prev, curr).as_str());
            text.push_str(curr.text());
        }
        text
    }

    /// Merges a line and collects the metadata of its regions.
    pub fn merge_block(&self, line: &Line) -> LineBlock {
        let regions = line.regions();
        let confidence = if regions.is_empty() {
            0.0
        } else {
            regions.iter().map(|r| r.confidence()).sum::<f32>() / regions.len() as f32
        };
        let bounding_box = regions
            .iter()
            .fold(BoundingBox::new(Vec::new()), |acc, r| {
                acc.union(&r.bounding_box())
            });

        LineBlock {
            text: self.merge_line(line),
            confidence,
            bounding_box,
            region_count: regions.len(),
        }
    }
}

impl Default for LineMerger {
    fn default() -> Self {
        Self::new(
            DEFAULT_WORD_MERGE_RATIO as f32,
            DEFAULT_WORD_SPACE_RATIO as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(regions: Vec<RegionDescriptor>) -> Line {
        Line::from(regions)
    }

    #[test]
    fn test_split_word_is_joined() {
        // gap 2 < 20 * 0.3
        let merged = LineMerger::default().merge_line(&line(vec![
            RegionDescriptor::new("fi", 10.0, 0.0, 10.0, 20.0),
            RegionDescriptor::new("le", 10.0, 12.0, 22.0, 20.0),
        ]));
        assert_eq!(merged, "file");
    }

    #[test]
    fn test_word_gap_gets_single_space() {
        // 6 <= gap 15 < 20
        let merged = LineMerger::default().merge_line(&line(vec![
            RegionDescriptor::new("template", 5.0, 45.0, 120.0, 20.0),
            RegionDescriptor::new("CSV", 5.0, 0.0, 30.0, 20.0),
        ]));
        assert_eq!(merged, "CSV template");
    }

    #[test]
    fn test_wide_gap_gets_double_space() {
        // gap 30 >= 20
        let merged = LineMerger::default().merge_line(&line(vec![
            RegionDescriptor::new("CSV", 5.0, 0.0, 30.0, 20.0),
            RegionDescriptor::new("template", 5.0, 60.0, 135.0, 20.0),
        ]));
        assert_eq!(merged, "CSV  template");
    }

    #[test]
    fn test_threshold_boundaries() {
        let merger = LineMerger::default();
        assert_eq!(merger.classify_gap(5.9, 20.0), Separator::None);
        assert_eq!(merger.classify_gap(6.0, 20.0), Separator::Space);
        assert_eq!(merger.classify_gap(19.9, 20.0), Separator::Space);
        assert_eq!(merger.classify_gap(20.0, 20.0), Separator::DoubleSpace);
        assert_eq!(merger.classify_gap(-4.0, 20.0), Separator::None);
    }

    #[test]
    fn test_zero_height_falls_back_to_single_space() {
        let merger = LineMerger::default();
        assert_eq!(merger.classify_gap(0.0, 0.0), Separator::None);
        assert_eq!(merger.classify_gap(-1.0, 0.0), Separator::None);
        assert_eq!(merger.classify_gap(0.5, 0.0), Separator::Space);
        assert_eq!(merger.classify_gap(500.0, 0.0), Separator::Space);
        assert_eq!(merger.classify_gap(3.0, f32::NAN), Separator::Space);
    }

    #[test]
    fn test_gap_measured_against_previous_region() {
        // "a"→"b" gap 2 (merge), "b"→"c" gap 25 (double); measuring "c"
        // against "a" would give a different result.
        let merged = LineMerger::default().merge_line(&line(vec![
            RegionDescriptor::new("a", 0.0, 0.0, 10.0, 20.0),
            RegionDescriptor::new("b", 0.0, 12.0, 40.0, 20.0),
            RegionDescriptor::new("c", 0.0, 65.0, 70.0, 20.0),
        ]));
        assert_eq!(merged, "ab  c");
    }

    #[test]
    fn test_empty_text_still_participates_in_gaps() {
        // "" spans 12..28: "a"→"" gap 2 (merge), ""→"b" gap 2 (merge).
        let merged = LineMerger::default().merge_line(&line(vec![
            RegionDescriptor::new("a", 0.0, 0.0, 10.0, 20.0),
            RegionDescriptor::new("", 0.0, 12.0, 28.0, 20.0),
            RegionDescriptor::new("b", 0.0, 30.0, 40.0, 20.0),
        ]));
        assert_eq!(merged, "ab");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(LineMerger::default().merge_line(&Line::default()), "");
    }

    #[test]
    fn test_block_metadata() {
        let block = LineMerger::default().merge_block(&line(vec![
            RegionDescriptor::new("fi", 10.0, 0.0, 10.0, 20.0).with_confidence(0.8),
            RegionDescriptor::new("le", 12.0, 12.0, 22.0, 20.0).with_confidence(0.6),
        ]));
        assert_eq!(block.text, "file");
        assert_eq!(block.region_count, 2);
        assert!((block.confidence - 0.7).abs() < 1e-6);
        assert_eq!(
            block.bounding_box,
            BoundingBox::from_coords(0.0, 10.0, 22.0, 32.0)
        );
    }
}
