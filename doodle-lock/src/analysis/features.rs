//! Stroke Feature Extraction
//!
//! Converts a multi-stroke gesture into a fixed-length numeric fingerprint.
//! Each stroke slot holds [`FEATURES_PER_STROKE`] values:
//!
//! ```text
//! [length, start_x, start_y, end_x, end_y, bbox_width, bbox_height, duration_ms]
//! ```
//!
//! Slots past the last drawn stroke stay zero; strokes past the last slot
//! are dropped.

use crate::capture::types::{Gesture, Stroke};
use serde::{Deserialize, Serialize};

/// Number of values emitted per stroke slot
pub const FEATURES_PER_STROKE: usize = 8;

/// Offsets of each feature inside a stroke slot
pub mod offset {
    pub const LENGTH: usize = 0;
    pub const START_X: usize = 1;
    pub const START_Y: usize = 2;
    pub const END_X: usize = 3;
    pub const END_Y: usize = 4;
    pub const WIDTH: usize = 5;
    pub const HEIGHT: usize = 6;
    pub const DURATION: usize = 7;
}

/// Versioned shape of a feature vector.
///
/// Vectors built under different layouts have different meanings per
/// dimension and must never be scored against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureLayout {
    /// Layout revision
    pub version: u32,
    /// Maximum number of strokes represented
    pub stroke_slots: usize,
}

impl FeatureLayout {
    /// 12 stroke slots of 8 features, 96 dimensions
    pub const CANONICAL: FeatureLayout = FeatureLayout {
        version: 2,
        stroke_slots: 12,
    };

    pub fn new(version: u32, stroke_slots: usize) -> Self {
        Self {
            version,
            stroke_slots,
        }
    }

    /// Total vector length (`REP_SIZE`)
    pub fn dimensions(&self) -> usize {
        self.stroke_slots * FEATURES_PER_STROKE
    }

    /// Dimension range covered by stroke slot `slot`
    pub fn slot_range(&self, slot: usize) -> std::ops::Range<usize> {
        let start = slot * FEATURES_PER_STROKE;
        start..start + FEATURES_PER_STROKE
    }
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Numeric fingerprint of one gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap raw values. Length is checked where the vector is consumed.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn zeros(dimensions: usize) -> Self {
        Self(vec![0.0; dimensions])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Fail with `ShapeMismatch` unless the vector fits `layout`
    pub fn check_shape(&self, layout: &FeatureLayout) -> crate::Result<()> {
        if self.len() != layout.dimensions() {
            return Err(crate::Error::ShapeMismatch {
                expected: layout.dimensions(),
                found: self.len(),
            });
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Gesture to feature vector converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureExtractor {
    layout: FeatureLayout,
}

impl FeatureExtractor {
    /// Extractor for the canonical layout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: FeatureLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }

    /// Convert a gesture into its feature vector
    pub fn extract(&self, gesture: &Gesture) -> FeatureVector {
        let mut values = vec![0.0; self.layout.dimensions()];

        for (slot, stroke) in gesture.strokes.iter().take(self.layout.stroke_slots).enumerate() {
            let range = self.layout.slot_range(slot);
            values[range].copy_from_slice(&Self::stroke_features(stroke));
        }

        FeatureVector(values)
    }

    /// Extract a batch of gestures in order
    pub fn extract_all<'a, I>(&self, gestures: I) -> Vec<FeatureVector>
    where
        I: IntoIterator<Item = &'a Gesture>,
    {
        gestures.into_iter().map(|g| self.extract(g)).collect()
    }

    fn stroke_features(stroke: &Stroke) -> [f64; FEATURES_PER_STROKE] {
        let start = stroke.start().unwrap_or_default();
        let end = stroke.end().unwrap_or_default();
        // Missing timing is a gap, not an error
        let duration = stroke.duration_ms().unwrap_or(0) as f64;

        let mut features = [0.0; FEATURES_PER_STROKE];
        features[offset::LENGTH] = stroke.length;
        features[offset::START_X] = start.x;
        features[offset::START_Y] = start.y;
        features[offset::END_X] = end.x;
        features[offset::END_Y] = end.y;
        features[offset::WIDTH] = stroke.bounding_box.width();
        features[offset::HEIGHT] = stroke.bounding_box.height();
        features[offset::DURATION] = duration;
        features
    }
}
