//! Scoring settings and results

use serde::{Deserialize, Serialize};

/// Default Gaussian widening factor (1 = strict, 10 = lenient)
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Default minimum score for acceptance
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Strictness knobs applied when scoring an attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Multiplier on each dimension's variance in the Gaussian exponent
    pub tolerance: f64,
    /// Minimum aggregate score to accept
    pub threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ScoringSettings {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(crate::Error::Config(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(crate::Error::Config(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Unnormalized Gaussian likelihood of `x` for one dimension.
    ///
    /// Callers guarantee `variance != 0`.
    pub fn gauss(&self, x: f64, mean: f64, variance: f64) -> f64 {
        let delta = x - mean;
        (-(delta * delta) / (2.0 * self.tolerance * variance)).exp()
    }
}

/// Outcome of scoring one attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Score reached the threshold
    Accepted,
    /// Statistical mismatch
    BelowThreshold,
    /// Attempt used a dimension that never varied in training and differs
    /// from its constant value, i.e. a different stroke structure
    ZeroVarianceMismatch { dimension: usize },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Detailed result of [`DoodleProfile::score`](super::DoodleProfile::score)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Product of the per-dimension likelihoods
    pub confidence: f64,
    /// Dimensions that contributed to `confidence`
    pub used_dimensions: usize,
    /// `confidence * used_dimensions`, or `confidence` alone when no
    /// dimension was used
    pub score: f64,
    pub verdict: Verdict,
}

impl ScoreReport {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}
