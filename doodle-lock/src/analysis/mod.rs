//! Gesture analysis
//!
//! Turns captured strokes into the fixed-length numeric representation the
//! profile is trained on.

pub mod features;

pub use features::{FeatureExtractor, FeatureLayout, FeatureVector, FEATURES_PER_STROKE};
