//! Processing stages of the reflow pipeline.
//!
//! * [`geometry`] - points and polygons, and their scalar projections
//! * [`line_grouping`] - vertical grouping of regions into lines
//! * [`line_merge`] - horizontal ordering and spacing within a line
//! * [`assembly`] - joining lines into the final text
//! * [`reflow`] - the stages chained together

pub mod assembly;
pub mod geometry;
pub mod line_grouping;
pub mod line_merge;
pub mod reflow;

pub use assembly::TextAssembler;
pub use geometry::{BoundingBox, Point};
pub use line_grouping::LineGrouper;
pub use line_merge::{LineMerger, Separator};
pub use reflow::reflow_regions;
