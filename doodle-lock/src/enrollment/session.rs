//! Enrollment session
//!
//! Collects training doodles one at a time. Until the minimum count is
//! reached every long-enough gesture is taken as-is; after that, a gesture
//! only joins the training set if it authenticates against the profile built
//! from the gestures already accepted. The profile is rebuilt from scratch on
//! every acceptance and discarded when the session finishes.

use super::policy::EnrollmentPolicy;
use crate::analysis::features::FeatureExtractor;
use crate::capture::types::Gesture;
use crate::profile::{DoodleProfile, ScoreReport, ScoringSettings};
use tracing::{debug, info};

/// Result of submitting one gesture
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Gesture joined the training set
    Accepted {
        /// Training set size after the gesture was added
        sample_count: usize,
        /// Whether the gesture was checked against a profile first
        validated: bool,
    },
    /// Gesture was shorter than the policy minimum and was dropped
    TooShort { length: f64 },
    /// Gesture did not match the current profile
    Rejected { report: ScoreReport },
    /// Training set already holds the policy maximum
    SessionFull,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// In-progress enrollment for one user
#[derive(Debug, Clone)]
pub struct EnrollmentSession {
    policy: EnrollmentPolicy,
    extractor: FeatureExtractor,
    scoring: ScoringSettings,
    gestures: Vec<Gesture>,
    profile: Option<DoodleProfile>,
}

impl EnrollmentSession {
    pub fn new(policy: EnrollmentPolicy, extractor: FeatureExtractor, scoring: ScoringSettings) -> Self {
        Self {
            policy,
            extractor,
            scoring,
            gestures: Vec::new(),
            profile: None,
        }
    }

    /// Offer a captured gesture to the training set
    pub fn submit(&mut self, gesture: Gesture) -> crate::Result<SubmitOutcome> {
        if self.is_full() {
            debug!(max = self.policy.max_samples, "Enrollment session full, gesture dropped");
            return Ok(SubmitOutcome::SessionFull);
        }

        gesture.validate()?;

        let length = gesture.length();
        if !self.policy.is_long_enough(&gesture) {
            debug!(length, min = self.policy.min_gesture_length, "Gesture too short");
            return Ok(SubmitOutcome::TooShort { length });
        }

        for (i, stroke) in gesture.strokes.iter().enumerate() {
            if !stroke.has_timing() {
                debug!(stroke = i, "Stroke has no timing data, duration feature set to 0");
            }
        }

        let validated = self.gestures.len() >= self.policy.min_samples;
        if validated {
            if let Some(profile) = &self.profile {
                let report = profile.score(&self.extractor.extract(&gesture))?;
                if !report.is_accepted() {
                    info!(score = report.score, verdict = ?report.verdict, "Gesture rejected by current profile");
                    return Ok(SubmitOutcome::Rejected { report });
                }
            }
        }

        // Train on a candidate set so a failure leaves the session untouched
        let mut candidate = self.gestures.clone();
        candidate.push(gesture);
        let profile = DoodleProfile::from_gestures(&self.extractor, self.scoring, &candidate)?;

        self.gestures = candidate;
        self.profile = Some(profile);

        info!(
            samples = self.gestures.len(),
            min = self.policy.min_samples,
            max = self.policy.max_samples,
            "Training gesture accepted"
        );

        Ok(SubmitOutcome::Accepted {
            sample_count: self.gestures.len(),
            validated,
        })
    }

    /// Enough gestures collected to finish
    pub fn can_finish(&self) -> bool {
        self.gestures.len() >= self.policy.min_samples
    }

    /// Training set reached the maximum
    pub fn is_full(&self) -> bool {
        self.gestures.len() >= self.policy.max_samples
    }

    /// End the session, handing back the raw training gestures.
    ///
    /// The profile is dropped; callers rebuild it from the gestures.
    pub fn finish(self) -> crate::Result<Vec<Gesture>> {
        if !self.can_finish() {
            return Err(crate::Error::Enrollment(format!(
                "need at least {} training gestures, have {}",
                self.policy.min_samples,
                self.gestures.len()
            )));
        }
        info!(samples = self.gestures.len(), "Enrollment finished");
        Ok(self.gestures)
    }

    /// Profile over the current training set, if any gesture was accepted
    pub fn profile(&self) -> Option<&DoodleProfile> {
        self.profile.as_ref()
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// Gestures that can still be added
    pub fn remaining_capacity(&self) -> usize {
        self.policy.max_samples.saturating_sub(self.gestures.len())
    }
}
