//! End-to-end tests for the doodle matching engine
//!
//! These tests exercise the full path:
//! Gesture -> Feature extraction -> Profile training -> Scoring

use doodle_lock::analysis::features::FEATURES_PER_STROKE;
use doodle_lock::{
    BoundingBox, DoodleProfile, FeatureExtractor, FeatureLayout, FeatureVector, Gesture, Point,
    ScoringSettings, Stroke, Verdict,
};
use std::sync::Arc;
use std::thread;

/// Stroke with explicit capture-layer values
fn make_stroke(length: f64, start: (f64, f64), end: (f64, f64), duration_ms: u64) -> Stroke {
    let points = vec![Point::new(start.0, start.1), Point::new(end.0, end.1)];
    let bounding_box = BoundingBox::from_points(&points);
    Stroke::from_parts(points, Some(vec![1_000, 1_000 + duration_ms]), bounding_box, length)
        .expect("valid stroke")
}

/// The reference doodle: one stroke, length 200, (0,0) to (50,50), 100 ms
fn reference_gesture() -> Gesture {
    Gesture::new(vec![make_stroke(200.0, (0.0, 0.0), (50.0, 50.0), 100)])
}

/// Slightly perturbed version of a two-stroke doodle
fn two_stroke_sample(jitter: f64) -> Gesture {
    Gesture::new(vec![
        make_stroke(
            180.0 + 4.0 * jitter,
            (10.0 + jitter, 12.0 - jitter),
            (120.0 + 2.0 * jitter, 95.0 + jitter),
            400 + (jitter * 10.0) as u64,
        ),
        make_stroke(
            90.0 - 3.0 * jitter,
            (60.0 - jitter, 20.0 + jitter),
            (62.0 + jitter, 110.0 - 2.0 * jitter),
            220 + (jitter * 8.0) as u64,
        ),
    ])
}

fn train(gestures: &[Gesture]) -> DoodleProfile {
    DoodleProfile::from_gestures(&FeatureExtractor::new(), ScoringSettings::default(), gestures)
        .expect("training succeeds")
}

#[test]
fn test_reference_scenario_means_and_variances() {
    let profile = train(&vec![reference_gesture(); 3]);

    assert_eq!(
        &profile.means()[..FEATURES_PER_STROKE],
        &[200.0, 0.0, 0.0, 50.0, 50.0, 50.0, 50.0, 100.0]
    );
    assert!(profile.means()[FEATURES_PER_STROKE..].iter().all(|&m| m == 0.0));
    assert!(profile.variances().iter().all(|&v| v == 0.0));
}

#[test]
fn test_reference_scenario_accepts_identical_attempt() {
    let extractor = FeatureExtractor::new();
    let profile = train(&vec![reference_gesture(); 3]);

    assert!(profile.authenticate_gesture(&extractor, &reference_gesture()).unwrap());
}

#[test]
fn test_reference_scenario_rejects_extra_stroke() {
    let extractor = FeatureExtractor::new();
    let profile = train(&vec![reference_gesture(); 3]);

    let mut attempt = reference_gesture();
    attempt.strokes.push(make_stroke(60.0, (5.0, 5.0), (30.0, 40.0), 80));

    let report = profile.score(&extractor.extract(&attempt)).unwrap();
    assert!(matches!(report.verdict, Verdict::ZeroVarianceMismatch { dimension } if (8..16).contains(&dimension)));
    assert!(!profile.authenticate_gesture(&extractor, &attempt).unwrap());
}

#[test]
fn test_varied_training_accepts_close_attempt() {
    let extractor = FeatureExtractor::new();
    let training: Vec<Gesture> = [-1.0, 0.0, 1.0, 0.5].iter().map(|&j| two_stroke_sample(j)).collect();
    let profile = train(&training);

    let report = profile.score(&extractor.extract(&two_stroke_sample(0.2))).unwrap();
    assert!(report.used_dimensions > 0);
    assert!(report.is_accepted(), "close attempt rejected: {:?}", report);
}

#[test]
fn test_varied_training_rejects_distant_attempt() {
    let extractor = FeatureExtractor::new();
    let training: Vec<Gesture> = [-1.0, 0.0, 1.0, 0.5].iter().map(|&j| two_stroke_sample(j)).collect();
    let profile = train(&training);

    let report = profile.score(&extractor.extract(&two_stroke_sample(25.0))).unwrap();
    assert_eq!(report.verdict, Verdict::BelowThreshold);
}

#[test]
fn test_fewer_strokes_than_training_is_not_hard_rejected() {
    // Attempt leaves the second slot empty: zero in a used dimension is
    // scored statistically, not structurally
    let extractor = FeatureExtractor::new();
    let training: Vec<Gesture> = [-1.0, 0.0, 1.0].iter().map(|&j| two_stroke_sample(j)).collect();
    let profile = train(&training);

    let mut attempt = two_stroke_sample(0.0);
    attempt.strokes.truncate(1);

    let report = profile.score(&extractor.extract(&attempt)).unwrap();
    assert_ne!(report.verdict, Verdict::Accepted);
    assert!(!matches!(report.verdict, Verdict::ZeroVarianceMismatch { .. }));
}

#[test]
fn test_missing_timing_scores_like_zero_duration() {
    let extractor = FeatureExtractor::new();

    let untimed = |length: f64| {
        let points = vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0)];
        let bbox = BoundingBox::from_points(&points);
        Gesture::new(vec![Stroke::from_parts(points, None, bbox, length).unwrap()])
    };

    let profile = train(&[untimed(200.0), untimed(210.0), untimed(190.0)]);
    let v = extractor.extract(&untimed(205.0));
    assert_eq!(v[7], 0.0);
    assert!(profile.authenticate(&v).unwrap());
}

#[test]
fn test_shape_mismatch_between_layouts() {
    let legacy = FeatureExtractor::with_layout(FeatureLayout::new(1, 9));
    let legacy_vector = legacy.extract(&reference_gesture());
    assert_eq!(legacy_vector.len(), 72);

    let profile = train(&[reference_gesture()]);
    assert!(matches!(
        profile.authenticate(&legacy_vector),
        Err(doodle_lock::Error::ShapeMismatch { expected: 96, found: 72 })
    ));

    let mixed = vec![FeatureExtractor::new().extract(&reference_gesture()), legacy_vector];
    assert!(DoodleProfile::train(FeatureLayout::CANONICAL, ScoringSettings::default(), &mixed).is_err());
}

#[test]
fn test_train_empty_is_shape_mismatch() {
    let result = DoodleProfile::train(FeatureLayout::CANONICAL, ScoringSettings::default(), &[]);
    assert!(matches!(result, Err(doodle_lock::Error::ShapeMismatch { .. })));
}

#[test]
fn test_all_zero_profile_accepts_empty_gesture() {
    let profile = train(&[Gesture::default(), Gesture::default()]);
    assert!(profile.authenticate(&FeatureVector::zeros(96)).unwrap());
    assert!(!profile
        .authenticate_gesture(&FeatureExtractor::new(), &reference_gesture())
        .unwrap());
}

#[test]
fn test_concurrent_scoring_on_shared_profile() {
    let extractor = FeatureExtractor::new();
    let training: Vec<Gesture> = [-1.0, 0.0, 1.0].iter().map(|&j| two_stroke_sample(j)).collect();
    let profile = Arc::new(train(&training));
    let expected = profile.score(&extractor.extract(&two_stroke_sample(0.3))).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let profile = Arc::clone(&profile);
            thread::spawn(move || {
                let extractor = FeatureExtractor::new();
                (0..50)
                    .map(|_| profile.score(&extractor.extract(&two_stroke_sample(0.3))).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for report in handle.join().expect("scoring thread panicked") {
            assert_eq!(report, expected);
        }
    }
}
