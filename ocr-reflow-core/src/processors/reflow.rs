//! End-to-end reflow of region descriptors.

use crate::core::config::ReflowConfig;
use crate::domain::{ReconstructedText, RegionDescriptor};
use crate::processors::{LineGrouper, LineMerger};
use std::borrow::Cow;
use tracing::debug;

/// Rebuilds the reading order of a set of regions.
///
/// Regions are grouped into lines, each line is merged left to right, and the
/// resulting blocks are returned top to bottom. The function never fails: any
/// set of descriptors, including an empty one, yields a result.
pub fn reflow_regions(regions: &[RegionDescriptor], config: &ReflowConfig) -> ReconstructedText {
    let regions: Cow<'_, [RegionDescriptor]> = if config.skip_empty_regions {
        let kept: Vec<RegionDescriptor> =
            regions.iter().filter(|r| !r.is_blank()).cloned().collect();
        if kept.len() < regions.len() {
            debug!("Skipped {} blank regions", regions.len() - kept.len());
        }
        Cow::Owned(kept)
    } else {
        Cow::Borrowed(regions)
    };

    debug!("Before merge: {} regions", regions.len());

    let lines = LineGrouper::from_config(config).group(&regions);
    let merger = LineMerger::from_config(config);
    let blocks = lines.iter().map(|line| merger.merge_block(line)).collect();

    let text = ReconstructedText::new(blocks);
    debug!("After merge: {} lines", text.line_count());
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let text = reflow_regions(&[], &ReflowConfig::default());
        assert!(text.is_empty());
        assert_eq!(text.to_text(), "");
    }

    #[test]
    fn test_two_lines() {
        let regions = vec![
            RegionDescriptor::new("template", 40.0, 45.0, 120.0, 20.0),
            RegionDescriptor::new("le", 10.0, 12.0, 22.0, 20.0),
            RegionDescriptor::new("CSV", 40.0, 0.0, 30.0, 20.0),
            RegionDescriptor::new("fi", 10.0, 0.0, 10.0, 20.0),
        ];
        let text = reflow_regions(&regions, &ReflowConfig::default());
        assert_eq!(text.to_text(), "file\nCSV template");
        assert_eq!(text.blocks[1].region_count, 2);
    }

    #[test]
    fn test_blank_regions_kept_by_default() {
        let regions = vec![RegionDescriptor::new("  ", 0.0, 0.0, 10.0, 20.0)];
        let text = reflow_regions(&regions, &ReflowConfig::default());
        assert_eq!(text.line_count(), 1);
        assert_eq!(text.to_text(), "  ");
    }

    #[test]
    fn test_skip_blank_regions() {
        let regions = vec![
            RegionDescriptor::new("", 0.0, 0.0, 10.0, 20.0),
            RegionDescriptor::new("body", 50.0, 0.0, 40.0, 20.0),
        ];
        let config = ReflowConfig::default().with_skip_empty_regions(true);
        let text = reflow_regions(&regions, &config);
        assert_eq!(text.lines(), vec!["body"]);
    }
}
