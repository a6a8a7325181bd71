//! Doodle profiles
//!
//! Training and scoring of the per-user statistical model.

pub mod doodle_profile;
pub mod scoring;

pub use doodle_profile::DoodleProfile;
pub use scoring::{ScoreReport, ScoringSettings, Verdict};
