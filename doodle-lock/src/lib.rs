//! # Doodle Lock
//!
//! Authenticates a user by a freehand drawn gesture ("doodle"), compared
//! against a statistical profile learned from that user's training doodles.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doodle_lock::{DoodleProfile, FeatureExtractor, Gesture, ScoringSettings};
//!
//! # fn load_training() -> Vec<Gesture> { Vec::new() }
//! # fn next_attempt() -> Gesture { Gesture::default() }
//! let extractor = FeatureExtractor::new();
//! let training = load_training();
//!
//! let profile = DoodleProfile::from_gestures(&extractor, ScoringSettings::default(), &training)?;
//! let accepted = profile.authenticate(&extractor.extract(&next_attempt()))?;
//! # Ok::<(), doodle_lock::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`capture`]: strokes and gestures as handed over by the drawing surface
//! - [`analysis`]: gesture to fixed-length feature vector
//! - [`profile`]: per-dimension Gaussian model, training and scoring
//! - [`enrollment`]: training-session policy around the model
//! - [`app`]: CLI, configuration and gesture file input
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Gesture   │───▶│  Feature    │───▶│   Doodle    │───▶│ accept /    │
//! │  (strokes)  │    │  Extractor  │    │   Profile   │    │ reject      │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```

pub mod capture;
pub mod analysis;
pub mod profile;
pub mod enrollment;
pub mod app;

// Re-export commonly used types
pub use analysis::{FeatureExtractor, FeatureLayout, FeatureVector};
pub use capture::types::{BoundingBox, Gesture, Point, Stroke};
pub use enrollment::{EnrollmentPolicy, EnrollmentSession, SubmitOutcome};
pub use profile::{DoodleProfile, ScoreReport, ScoringSettings, Verdict};

/// Result type alias for doodle lock
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for doodle lock
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shape mismatch: expected {expected} dimensions, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Layout mismatch: profile uses layout v{expected}, extractor uses v{found}")]
    LayoutMismatch { expected: u32, found: u32 },

    #[error("Invalid stroke: {0}")]
    InvalidStroke(String),

    #[error("Enrollment error: {0}")]
    Enrollment(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
