//! Per-user Gaussian doodle profile
//!
//! Learns an independent mean and population variance per feature dimension
//! from a handful of training vectors, then scores attempts as the product
//! of per-dimension Gaussian likelihoods.

use super::scoring::{ScoreReport, ScoringSettings, Verdict};
use crate::analysis::features::{FeatureExtractor, FeatureLayout, FeatureVector};
use crate::capture::types::Gesture;
use tracing::debug;

/// Trained statistical model of one user's doodle.
///
/// Immutable: a grown training set means a new profile.
#[derive(Debug, Clone, PartialEq)]
pub struct DoodleProfile {
    layout: FeatureLayout,
    settings: ScoringSettings,
    means: Vec<f64>,
    variances: Vec<f64>,
    sample_count: usize,
}

impl DoodleProfile {
    /// Train a profile from feature vectors.
    ///
    /// Fails with `ShapeMismatch` on an empty set or on any vector whose
    /// length does not match `layout`.
    pub fn train(
        layout: FeatureLayout,
        settings: ScoringSettings,
        samples: &[FeatureVector],
    ) -> crate::Result<Self> {
        let dimensions = layout.dimensions();
        if samples.is_empty() {
            return Err(crate::Error::ShapeMismatch {
                expected: dimensions,
                found: 0,
            });
        }
        for sample in samples {
            sample.check_shape(&layout)?;
        }

        let n = samples.len() as f64;

        let means: Vec<f64> = (0..dimensions)
            .map(|d| samples.iter().map(|s| s[d]).sum::<f64>() / n)
            .collect();

        // Variance needs the full-set mean, so it is a second pass
        let variances: Vec<f64> = (0..dimensions)
            .map(|d| {
                samples
                    .iter()
                    .map(|s| {
                        let delta = means[d] - s[d];
                        delta * delta
                    })
                    .sum::<f64>()
                    / n
            })
            .collect();

        debug!(
            samples = samples.len(),
            layout_version = layout.version,
            "Trained doodle profile"
        );

        Ok(Self {
            layout,
            settings,
            means,
            variances,
            sample_count: samples.len(),
        })
    }

    /// Extract every gesture with `extractor` and train on the result
    pub fn from_gestures(
        extractor: &FeatureExtractor,
        settings: ScoringSettings,
        gestures: &[Gesture],
    ) -> crate::Result<Self> {
        let samples = extractor.extract_all(gestures);
        Self::train(extractor.layout(), settings, &samples)
    }

    /// Score an attempt against the profile
    pub fn score(&self, attempt: &FeatureVector) -> crate::Result<ScoreReport> {
        attempt.check_shape(&self.layout)?;

        let mut confidence = 1.0;
        let mut used_dimensions = 0usize;

        for (d, (&mean, &variance)) in self.means.iter().zip(&self.variances).enumerate() {
            let x = attempt[d];

            if variance != 0.0 {
                confidence *= self.settings.gauss(x, mean, variance);
                used_dimensions += 1;
            } else if x != 0.0 && x != mean {
                debug!(dimension = d, value = x, expected = mean, "Zero-variance dimension mismatch");
                return Ok(ScoreReport {
                    confidence,
                    used_dimensions,
                    score: 0.0,
                    verdict: Verdict::ZeroVarianceMismatch { dimension: d },
                });
            }
        }

        // An attempt that reproduces a constant training set exactly leaves
        // no dimension to score; it is a perfect match, not a zero score.
        let score = if used_dimensions == 0 {
            confidence
        } else {
            confidence * used_dimensions as f64
        };

        let verdict = if score >= self.settings.threshold {
            Verdict::Accepted
        } else {
            Verdict::BelowThreshold
        };

        debug!(confidence, used_dimensions, score, ?verdict, "Scored doodle attempt");

        Ok(ScoreReport {
            confidence,
            used_dimensions,
            score,
            verdict,
        })
    }

    /// Accept or reject an attempt
    pub fn authenticate(&self, attempt: &FeatureVector) -> crate::Result<bool> {
        Ok(self.score(attempt)?.is_accepted())
    }

    /// Extract `gesture` under this profile's layout and authenticate it
    pub fn authenticate_gesture(&self, extractor: &FeatureExtractor, gesture: &Gesture) -> crate::Result<bool> {
        let layout = extractor.layout();
        if layout.dimensions() != self.layout.dimensions() {
            return Err(crate::Error::ShapeMismatch {
                expected: self.layout.dimensions(),
                found: layout.dimensions(),
            });
        }
        // Same width is not enough: slot contents differ between versions
        if layout.version != self.layout.version {
            return Err(crate::Error::LayoutMismatch {
                expected: self.layout.version,
                found: layout.version,
            });
        }
        self.authenticate(&extractor.extract(gesture))
    }

    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }

    pub fn settings(&self) -> ScoringSettings {
        self.settings
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    /// Number of training vectors the profile was built from
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}
