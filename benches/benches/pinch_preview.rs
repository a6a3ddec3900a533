// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use zoomer_gesture::{PinchTracker, TouchPoint};
use zoomer_view::{PinchPreview, ViewState, clamp, compute_transform};

const FRAME: Size = Size::new(390.0, 844.0);
const CONTENT: Size = Size::new(2048.0, 2048.0);

fn bench_compute_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/compute_transform");
    let fitted = ViewState::fit(FRAME, CONTENT).unwrap();
    let zoomed = fitted.committed(3.0, Vec2::ZERO);

    for (name, state) in [("fitted", fitted), ("zoomed", zoomed)] {
        for ratio in [0.25, 1.0, 2.5] {
            let preview = PinchPreview {
                start_centroid: Point::new(195.0, 422.0),
                centroid: Point::new(180.0, 440.0),
                ratio,
            };
            group.bench_with_input(
                BenchmarkId::new(name, ratio),
                &(state, preview),
                |b, (state, preview)| {
                    b.iter(|| {
                        black_box(compute_transform(
                            black_box(state),
                            black_box(preview),
                            FRAME,
                            CONTENT,
                        ))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/clamp");
    let rendered = Rect::new(120.0, -300.0, 2168.0, 1748.0);
    group.bench_function("correction", |b| {
        b.iter(|| black_box(clamp::correction(black_box(rendered), FRAME)));
    });
    let m = ViewState::fit(FRAME, CONTENT).unwrap().affine();
    group.bench_function("insert_correction", |b| {
        b.iter(|| black_box(clamp::insert_correction(black_box(m), Vec2::new(12.0, -4.0))));
    });
    group.finish();
}

fn bench_tracker_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch/tracker");
    // A 120-event move stream with a third resting finger listed first.
    let frames: Vec<[TouchPoint; 3]> = (0..120)
        .map(|i| {
            let half = 40.0 + f64::from(i);
            [
                TouchPoint::new(9, 20.0, 20.0),
                TouchPoint::new(2, 195.0 + half, 422.0),
                TouchPoint::new(1, 195.0 - half, 422.0),
            ]
        })
        .collect();
    let start = [
        TouchPoint::new(1, 155.0, 422.0),
        TouchPoint::new(2, 235.0, 422.0),
    ];

    group.bench_function("start_update_end", |b| {
        b.iter(|| {
            let mut tracker = PinchTracker::default();
            tracker.try_start(&start);
            for touches in &frames {
                black_box(tracker.update(touches));
            }
            black_box(tracker.try_end(&[]))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute_transform, bench_clamp, bench_tracker_stream);
criterion_main!(benches);
