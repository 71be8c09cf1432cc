//! Constants used throughout the reflow pipeline.

/// Default ratio of the average region height under which two regions are
/// considered to lie on the same line.
pub const DEFAULT_LINE_GROUPING_RATIO: f64 = 0.5;

/// Default ratio of the average region height under which a horizontal gap
/// is treated as noise inside a single word.
pub const DEFAULT_WORD_MERGE_RATIO: f64 = 0.3;

/// Default ratio of the average region height under which a horizontal gap
/// is an ordinary word boundary. Wider gaps are rendered as two spaces.
pub const DEFAULT_WORD_SPACE_RATIO: f64 = 1.0;

/// Minimum number of polygon vertices needed to measure a region: a top edge
/// plus one vertex that closes the leading side.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Number of inputs at or below which batch reflow runs sequentially.
pub const DEFAULT_BATCH_PARALLEL_THRESHOLD: usize = 4;

/// Separator placed between consecutive reconstructed lines.
pub const LINE_SEPARATOR: &str = "\n";
