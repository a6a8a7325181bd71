//! Criterion benchmarks for the doodle matching hot paths
//!
//! Covers: feature extraction, profile training over the enrollment range,
//! and scoring against a trained profile.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use doodle_lock::{
    BoundingBox, DoodleProfile, FeatureExtractor, Gesture, Point, ScoringSettings, Stroke,
};

fn make_gesture(strokes: usize, jitter: f64) -> Gesture {
    Gesture::new(
        (0..strokes)
            .map(|i| {
                let offset = i as f64 * 25.0;
                let points: Vec<Point> = (0..32)
                    .map(|k| {
                        let t = k as f64 / 31.0;
                        Point::new(offset + 60.0 * t + jitter, 20.0 + 80.0 * t * t - jitter)
                    })
                    .collect();
                let timestamps = (0..32).map(|k| 400 * i as u64 + 8 * k).collect();
                let bbox = BoundingBox::from_points(&points);
                Stroke::from_parts(points, Some(timestamps), bbox, 110.0 + jitter).unwrap()
            })
            .collect(),
    )
}

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let mut group = c.benchmark_group("extract");

    for strokes in [1, 4, 12, 20] {
        let gesture = make_gesture(strokes, 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(strokes), &gesture, |b, g| {
            b.iter(|| extractor.extract(black_box(g)));
        });
    }

    group.finish();
}

fn bench_train(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let mut group = c.benchmark_group("train");

    for samples in [3, 10] {
        let vectors: Vec<_> = (0..samples)
            .map(|i| extractor.extract(&make_gesture(4, i as f64 * 0.5)))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &vectors, |b, v| {
            b.iter(|| {
                DoodleProfile::train(extractor.layout(), ScoringSettings::default(), black_box(v))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let training: Vec<Gesture> = (0..10).map(|i| make_gesture(4, i as f64 * 0.5)).collect();
    let profile =
        DoodleProfile::from_gestures(&extractor, ScoringSettings::default(), &training).unwrap();
    let attempt = extractor.extract(&make_gesture(4, 1.25));

    c.bench_function("score", |b| {
        b.iter(|| profile.score(black_box(&attempt)).unwrap());
    });
}

criterion_group!(benches, bench_extract, bench_train, bench_score);
criterion_main!(benches);
