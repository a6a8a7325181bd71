//! Enrollment policy

use crate::capture::types::Gesture;
use serde::{Deserialize, Serialize};

/// Training gestures collected before attempts are validated
pub const TRAINING_SESSION_COUNT_MIN: usize = 3;

/// Training gestures after which the session stops accepting
pub const TRAINING_SESSION_COUNT_MAX: usize = 10;

/// Gestures with a shorter total path are discarded before extraction
pub const LENGTH_THRESHOLD: f64 = 120.0;

/// Upper bound on `max_samples` a policy may declare
pub const MAX_TRAINING_SAMPLES: usize = 1_000;

/// When training starts being validated, when it stops, and which
/// gestures are too small to consider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentPolicy {
    pub min_samples: usize,
    pub max_samples: usize,
    pub min_gesture_length: f64,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            min_samples: TRAINING_SESSION_COUNT_MIN,
            max_samples: TRAINING_SESSION_COUNT_MAX,
            min_gesture_length: LENGTH_THRESHOLD,
        }
    }
}

impl EnrollmentPolicy {
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_samples == 0 {
            return Err(crate::Error::Config("min_samples must be > 0".to_string()));
        }
        if self.max_samples > MAX_TRAINING_SAMPLES {
            return Err(crate::Error::Config(format!(
                "max_samples must be <= {}, got {}",
                MAX_TRAINING_SAMPLES, self.max_samples
            )));
        }
        if self.max_samples < self.min_samples {
            return Err(crate::Error::Config(format!(
                "max_samples ({}) must be >= min_samples ({})",
                self.max_samples, self.min_samples
            )));
        }
        if !self.min_gesture_length.is_finite() || self.min_gesture_length < 0.0 {
            return Err(crate::Error::Config(format!(
                "min_gesture_length must be a non-negative number, got {}",
                self.min_gesture_length
            )));
        }
        Ok(())
    }

    /// Length pre-filter applied before a gesture reaches the extractor
    pub fn is_long_enough(&self, gesture: &Gesture) -> bool {
        gesture.length() >= self.min_gesture_length
    }
}
