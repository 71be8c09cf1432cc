//! Region descriptors: detections reduced to the scalar geometry used for reflow.

use super::Detection;
use crate::core::constants::MIN_POLYGON_POINTS;
use crate::core::errors::{ReflowError, ReflowResult};
use crate::core::validation::{validate_finite, validate_min_len};
use crate::processors::BoundingBox;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

/// Normalized view of one detection: text, confidence and scalar geometry.
///
/// A descriptor is immutable once built. The constructors keep the invariants
/// `right >= left` and `height >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionDescriptor {
    text: Arc<str>,
    confidence: f32,
    top: f32,
    left: f32,
    right: f32,
    height: f32,
}

impl RegionDescriptor {
    /// Creates a descriptor from already-measured geometry.
    ///
    /// Reversed horizontal bounds are swapped and a negative height is
    /// clamped to zero. A non-finite horizontal bound collapses onto the
    /// other one (or 0.0 when both are non-finite); a non-finite `top` or
    /// `height` becomes 0.0. The confidence starts at 0.0; see
    /// [`with_confidence`].
    ///
    /// [`with_confidence`]: RegionDescriptor::with_confidence
    pub fn new(text: impl Into<Arc<str>>, top: f32, left: f32, right: f32, height: f32) -> Self {
        let (left, right) = match (left.is_finite(), right.is_finite()) {
            (true, true) if right < left => (right, left),
            (true, true) => (left, right),
            (true, false) => (left, left),
            (false, true) => (right, right),
            (false, false) => (0.0, 0.0),
        };
        Self {
            text: text.into(),
            confidence: 0.0,
            top: finite_or_zero(top),
            left,
            right,
            height: finite_or_zero(height).max(0.0),
        }
    }

    /// Returns the descriptor with the given recognition confidence.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Measures a detection polygon.
    ///
    /// - `top` is the mean Y of the first two vertices (the top edge),
    /// - `left`/`right` are the min/max X over all vertices,
    /// - `height` is |Y(last) - Y(first)|, the leading side of a clockwise quad.
    ///
    /// Empty text and zero-area polygons are accepted. Polygons with fewer
    /// than three vertices or with non-finite coordinates are rejected.
    pub fn try_from_detection(detection: &Detection) -> ReflowResult<Self> {
        Self::measure(
            detection.text.clone(),
            detection.confidence,
            &detection.polygon,
        )
    }

    fn measure(text: Arc<str>, confidence: f32, polygon: &BoundingBox) -> ReflowResult<Self> {
        validate_min_len(&polygon.points, MIN_POLYGON_POINTS, "polygon")?;
        for point in &polygon.points {
            validate_finite(point.x, "polygon.x")?;
            validate_finite(point.y, "polygon.y")?;
        }

        Ok(Self::new(
            text,
            polygon.top_edge_y(),
            polygon.x_min(),
            polygon.x_max(),
            polygon.side_height(),
        )
        .with_confidence(confidence))
    }

    /// Recognized text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Recognition confidence. Not used by any merge decision.
    #[inline]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Y of the top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Smallest X of the region.
    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Largest X of the region.
    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Vertical extent of the region.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Y of the bottom edge (`top + height`).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns true if the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Axis-aligned box spanned by the scalar geometry.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_coords(self.left, self.top, self.right, self.bottom())
    }

    /// Vertical reading order: by `top`, with the remaining fields as tie-breakers
    /// so that equal tops never depend on input order.
    pub fn cmp_vertical(&self, other: &Self) -> Ordering {
        self.top
            .total_cmp(&other.top)
            .then_with(|| self.cmp_horizontal(other))
    }

    /// Horizontal reading order: by `left`, with the remaining fields as
    /// tie-breakers so that equal lefts never depend on input order.
    pub fn cmp_horizontal(&self, other: &Self) -> Ordering {
        self.left
            .total_cmp(&other.left)
            .then_with(|| self.right.total_cmp(&other.right))
            .then_with(|| self.top.total_cmp(&other.top))
            .then_with(|| self.height.total_cmp(&other.height))
            .then_with(|| self.text.cmp(&other.text))
            .then_with(|| self.confidence.total_cmp(&other.confidence))
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

impl TryFrom<&Detection> for RegionDescriptor {
    type Error = ReflowError;

    fn try_from(detection: &Detection) -> Result<Self, Self::Error> {
        Self::try_from_detection(detection)
    }
}

impl TryFrom<Detection> for RegionDescriptor {
    type Error = ReflowError;

    fn try_from(detection: Detection) -> Result<Self, Self::Error> {
        Self::measure(detection.text, detection.confidence, &detection.polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::Point;

    #[test]
    fn test_from_axis_aligned_detection() {
        let detection = Detection::new(
            "CSV",
            0.93,
            BoundingBox::from_coords(0.0, 5.0, 30.0, 25.0),
        );
        let region = RegionDescriptor::try_from_detection(&detection).unwrap();

        assert_eq!(region.text(), "CSV");
        assert_eq!(region.confidence(), 0.93);
        assert_eq!(region.top(), 5.0);
        assert_eq!(region.left(), 0.0);
        assert_eq!(region.right(), 30.0);
        assert_eq!(region.height(), 20.0);
        assert_eq!(region.bottom(), 25.0);
    }

    #[test]
    fn test_from_rotated_quad() {
        // Left-most X comes from the bottom-left vertex here.
        let polygon = BoundingBox::new(vec![
            Point::new(4.0, 10.0),
            Point::new(60.0, 12.0),
            Point::new(58.0, 32.0),
            Point::new(2.0, 30.0),
        ]);
        let region = RegionDescriptor::try_from(Detection::new("tilt", 0.5, polygon)).unwrap();

        assert_eq!(region.top(), 11.0);
        assert_eq!(region.left(), 2.0);
        assert_eq!(region.right(), 60.0);
        assert_eq!(region.height(), 20.0);
    }

    #[test]
    fn test_keeps_degenerate_input() {
        let flat = Detection::new("", 0.0, BoundingBox::from_coords(3.0, 8.0, 3.0, 8.0));
        let region = RegionDescriptor::try_from(&flat).unwrap();
        assert_eq!(region.text(), "");
        assert_eq!(region.height(), 0.0);
        assert_eq!(region.left(), region.right());
        assert!(region.is_blank());
    }

    #[test]
    fn test_rejects_single_point_polygon() {
        let detection = Detection::new("x", 1.0, BoundingBox::new(vec![Point::new(1.0, 1.0)]));
        let err = RegionDescriptor::try_from(&detection).unwrap_err();
        assert!(matches!(err, ReflowError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_rejects_two_point_polygon() {
        let polygon = BoundingBox::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
        let err = RegionDescriptor::try_from(Detection::new("x", 1.0, polygon)).unwrap_err();
        assert!(matches!(err, ReflowError::InvalidGeometry { .. }));
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_measures_triangle() {
        let polygon = BoundingBox::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
        ]);
        let region = RegionDescriptor::try_from(Detection::new("tri", 1.0, polygon)).unwrap();
        assert_eq!(region.top(), 0.0);
        assert_eq!(region.height(), 20.0);
        assert_eq!(region.left(), 0.0);
        assert_eq!(region.right(), 10.0);
    }

    #[test]
    fn test_rejects_non_finite_coordinates() {
        let detection = Detection::new(
            "x",
            1.0,
            BoundingBox::from_coords(0.0, 0.0, f32::INFINITY, 10.0),
        );
        assert!(RegionDescriptor::try_from(&detection).is_err());
    }

    #[test]
    fn test_new_normalizes_invariants() {
        let region = RegionDescriptor::new("r", 0.0, 40.0, 10.0, -5.0);
        assert_eq!(region.left(), 10.0);
        assert_eq!(region.right(), 40.0);
        assert_eq!(region.height(), 0.0);

        let nan_height = RegionDescriptor::new("r", 0.0, 0.0, 1.0, f32::NAN);
        assert_eq!(nan_height.height(), 0.0);
    }

    #[test]
    fn test_new_collapses_non_finite_bounds() {
        let nan_left = RegionDescriptor::new("a", 0.0, f32::NAN, 10.0, 20.0);
        assert_eq!(nan_left.left(), 10.0);
        assert_eq!(nan_left.right(), 10.0);

        let inf_right = RegionDescriptor::new("a", 0.0, 4.0, f32::INFINITY, 20.0);
        assert_eq!(inf_right.left(), 4.0);
        assert_eq!(inf_right.right(), 4.0);

        let void = RegionDescriptor::new("a", f32::NAN, f32::NAN, f32::NEG_INFINITY, 20.0);
        assert_eq!(void.top(), 0.0);
        assert_eq!(void.left(), 0.0);
        assert_eq!(void.right(), 0.0);
        assert!(void.right() >= void.left());
    }

    #[test]
    fn test_ordering_breaks_ties() {
        let a = RegionDescriptor::new("a", 10.0, 5.0, 15.0, 20.0);
        let b = RegionDescriptor::new("b", 10.0, 5.0, 15.0, 20.0);
        assert_eq!(a.cmp_vertical(&b), Ordering::Less);
        assert_eq!(b.cmp_horizontal(&a), Ordering::Greater);
    }
}
