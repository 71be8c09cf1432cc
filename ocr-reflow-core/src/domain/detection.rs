//! Raw detections as produced by an OCR engine.

use crate::processors::BoundingBox;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One text region reported by an OCR engine, before any geometry is derived.
///
/// The polygon is kept exactly as the engine returned it; see
/// [`RegionDescriptor::try_from_detection`](crate::domain::RegionDescriptor::try_from_detection)
/// for how it is projected onto scalar geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Recognized text. May be empty.
    pub text: Arc<str>,
    /// Recognition confidence reported by the engine.
    pub confidence: f32,
    /// Detection polygon in image pixels, Y increasing downward.
    pub polygon: BoundingBox,
}

impl Detection {
    /// Creates a new detection.
    pub fn new(text: impl Into<Arc<str>>, confidence: f32, polygon: BoundingBox) -> Self {
        Self {
            text: text.into(),
            confidence,
            polygon,
        }
    }

    /// Builds detections from the parallel arrays most OCR engines return:
    /// recognized texts, recognition scores and detection polygons.
    ///
    /// Pairing stops at the shorter of `texts` and `polygons`. A text without
    /// a matching score gets a confidence of 0.0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ocr_reflow_core::domain::Detection;
    /// use ocr_reflow_core::processors::BoundingBox;
    ///
    /// let detections = Detection::from_parallel(
    ///     ["fi", "le"],
    ///     [0.98],
    ///     [
    ///         BoundingBox::from_coords(0.0, 10.0, 10.0, 30.0),
    ///         BoundingBox::from_coords(12.0, 10.0, 22.0, 30.0),
    ///     ],
    /// );
    /// assert_eq!(detections.len(), 2);
    /// assert_eq!(detections[1].confidence, 0.0);
    /// ```
    pub fn from_parallel<T, S, P>(texts: T, scores: S, polygons: P) -> Vec<Detection>
    where
        T: IntoIterator,
        T::Item: Into<Arc<str>>,
        S: IntoIterator<Item = f32>,
        P: IntoIterator<Item = BoundingBox>,
    {
        let mut scores = scores.into_iter();
        texts
            .into_iter()
            .zip(polygons)
            .map(|(text, polygon)| Detection::new(text, scores.next().unwrap_or(0.0), polygon))
            .collect()
    }
}
