//! Core types for captured pen input
//!
//! A [`Gesture`] is what the capture layer hands over once a drawing session
//! ends: an ordered list of [`Stroke`]s, each one pen-down to pen-up.

use serde::{Deserialize, Serialize};

/// Point in 2D screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding box of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Tight box around `points`; the zero box for an empty slice
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        points.iter().skip(1).fold(
            Self::new(first.x, first.y, first.x, first.y),
            |bbox, p| Self {
                min_x: bbox.min_x.min(p.x),
                min_y: bbox.min_y.min(p.y),
                max_x: bbox.max_x.max(p.x),
                max_y: bbox.max_y.max(p.y),
            },
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One continuous pen-down-to-pen-up path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled path, in drawing order
    pub points: Vec<Point>,
    /// Per-point capture time in milliseconds, parallel to `points`.
    /// `None` when the capture layer could not provide timing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<u64>>,
    pub bounding_box: BoundingBox,
    /// Path length as measured by the capture layer
    pub length: f64,
}

impl Stroke {
    /// Build a stroke from capture-layer values, checking its invariants
    pub fn from_parts(
        points: Vec<Point>,
        timestamps: Option<Vec<u64>>,
        bounding_box: BoundingBox,
        length: f64,
    ) -> crate::Result<Self> {
        let stroke = Self {
            points,
            timestamps,
            bounding_box,
            length,
        };
        stroke.validate()?;
        Ok(stroke)
    }

    /// Build a stroke from raw samples, deriving bounding box and polyline length
    pub fn from_points(points: Vec<Point>, timestamps: Option<Vec<u64>>) -> crate::Result<Self> {
        let bounding_box = BoundingBox::from_points(&points);
        let length = points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        Self::from_parts(points, timestamps, bounding_box, length)
    }

    /// Check the stroke invariants.
    ///
    /// Points must be non-empty, timestamps (when present) must match the
    /// point count and never go backwards, and the length must be a finite,
    /// non-negative number.
    pub fn validate(&self) -> crate::Result<()> {
        if self.points.is_empty() {
            return Err(crate::Error::InvalidStroke(
                "stroke has no points".to_string(),
            ));
        }
        if let Some(timestamps) = &self.timestamps {
            if timestamps.len() != self.points.len() {
                return Err(crate::Error::InvalidStroke(format!(
                    "{} timestamps for {} points",
                    timestamps.len(),
                    self.points.len()
                )));
            }
            if timestamps.windows(2).any(|pair| pair[1] < pair[0]) {
                return Err(crate::Error::InvalidStroke(
                    "timestamps are not monotonic".to_string(),
                ));
            }
        }
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(crate::Error::InvalidStroke(format!(
                "invalid stroke length {}",
                self.length
            )));
        }
        Ok(())
    }

    /// First sampled point
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last sampled point
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Time from first to last sample (ms), if timing was captured
    pub fn duration_ms(&self) -> Option<u64> {
        let timestamps = self.timestamps.as_ref()?;
        let first = timestamps.first()?;
        let last = timestamps.last()?;
        Some(last.saturating_sub(*first))
    }

    pub fn has_timing(&self) -> bool {
        self.duration_ms().is_some()
    }
}

/// One captured drawing session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gesture {
    pub strokes: Vec<Stroke>,
}

impl Gesture {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Total path length over all strokes
    pub fn length(&self) -> f64 {
        self.strokes.iter().map(|s| s.length).sum()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Validate every stroke, reporting the first offending index
    pub fn validate(&self) -> crate::Result<()> {
        for (i, stroke) in self.strokes.iter().enumerate() {
            stroke.validate().map_err(|e| match e {
                crate::Error::InvalidStroke(msg) => {
                    crate::Error::InvalidStroke(format!("stroke {}: {}", i, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
