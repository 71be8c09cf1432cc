//! Geometric primitives for OCR detections.
//!
//! Detection polygons arrive as ordered vertex lists in image pixel space with
//! Y increasing downward. The reflow algorithm only needs scalar projections of
//! those polygons (top edge, horizontal extent, side height), which this module
//! provides.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A bounding polygon represented by an ordered collection of points.
///
/// Quads produced by text detectors list their vertices clockwise starting at
/// the top-left corner: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The points that define the bounding box.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned bounding box from coordinates.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Number of vertices in the polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if every vertex has finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }

    /// Gets the minimum x-coordinate of all points, or 0.0 if there are no points.
    pub fn x_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the maximum x-coordinate of all points, or 0.0 if there are no points.
    pub fn x_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Gets the minimum y-coordinate of all points, or 0.0 if there are no points.
    pub fn y_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the maximum y-coordinate of all points, or 0.0 if there are no points.
    pub fn y_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Average Y of the top edge, formed by the first two vertices.
    ///
    /// Falls back to the single vertex for one-point polygons and to 0.0 for
    /// empty ones.
    pub fn top_edge_y(&self) -> f32 {
        match self.points.as_slice() {
            [] => 0.0,
            [only] => only.y,
            [first, second, ..] => (first.y + second.y) / 2.0,
        }
    }

    /// Vertical extent of the leading side: |Y(last) - Y(first)|.
    ///
    /// For a clockwise quad this pairs the top-left with the bottom-left
    /// vertex; for a triangle it is the closing vertex against the first.
    /// Returns 0.0 for polygons with fewer than two vertices.
    pub fn side_height(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (last.y - first.y).abs(),
            _ => 0.0,
        }
    }

    /// Axis-aligned box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        BoundingBox::from_coords(
            self.x_min().min(other.x_min()),
            self.y_min().min(other.y_min()),
            self.x_max().max(other.x_max()),
            self.y_max().max(other.y_max()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_projections() {
        let bbox = BoundingBox::from_coords(10.0, 20.0, 50.0, 44.0);
        assert_eq!(bbox.x_min(), 10.0);
        assert_eq!(bbox.x_max(), 50.0);
        assert_eq!(bbox.y_min(), 20.0);
        assert_eq!(bbox.y_max(), 44.0);
        assert_eq!(bbox.top_edge_y(), 20.0);
        assert_eq!(bbox.side_height(), 24.0);
    }

    #[test]
    fn test_tilted_quad_top_edge_is_averaged() {
        // Slight clockwise tilt: right end of the top edge sits 4px lower.
        let bbox = BoundingBox::new(vec![
            Point::new(0.0, 10.0),
            Point::new(100.0, 14.0),
            Point::new(100.0, 34.0),
            Point::new(0.0, 30.0),
        ]);
        assert_eq!(bbox.top_edge_y(), 12.0);
        assert_eq!(bbox.side_height(), 20.0);
        assert_eq!(bbox.x_min(), 0.0);
        assert_eq!(bbox.x_max(), 100.0);
    }

    #[test]
    fn test_degenerate_polygons() {
        let empty = BoundingBox::new(Vec::new());
        assert_eq!(empty.top_edge_y(), 0.0);
        assert_eq!(empty.side_height(), 0.0);
        assert_eq!(empty.x_min(), 0.0);

        let single = BoundingBox::new(vec![Point::new(3.0, 7.0)]);
        assert_eq!(single.top_edge_y(), 7.0);
        assert_eq!(single.side_height(), 0.0);

        let flat = BoundingBox::from_coords(0.0, 5.0, 10.0, 5.0);
        assert_eq!(flat.side_height(), 0.0);
    }

    #[test]
    fn test_triangle_projections() {
        let bbox = BoundingBox::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
        ]);
        assert_eq!(bbox.top_edge_y(), 0.0);
        assert_eq!(bbox.side_height(), 20.0);
        assert_eq!(bbox.x_min(), 0.0);
        assert_eq!(bbox.x_max(), 10.0);
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::from_coords(0.0, 10.0, 20.0, 30.0);
        let b = BoundingBox::from_coords(25.0, 5.0, 40.0, 28.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::from_coords(0.0, 5.0, 40.0, 30.0));

        let empty = BoundingBox::new(Vec::new());
        assert_eq!(empty.union(&a), a);
    }

    #[test]
    fn test_is_finite() {
        assert!(BoundingBox::from_coords(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!BoundingBox::from_coords(0.0, f32::NAN, 1.0, 1.0).is_finite());
    }
}
