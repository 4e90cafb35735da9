// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use vizanti_gesture::GestureTracker;
use vizanti_view::{MapTransform, MemoryScaleStore, Viewport};

const SCREEN: Size = Size::new(1920.0, 1080.0);

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let t = MapTransform::new(Point::new(-12.5, 340.0), 37.0);
    let points: Vec<Point> = (0..1024_u32)
        .map(|i| Point::new(f64::from(i % 64) * 30.0, f64::from(i / 64) * 67.0))
        .collect();

    group.bench_function("screen_to_map_to_screen", |b| {
        b.iter(|| {
            for &q in &points {
                black_box(t.map_to_screen(t.screen_to_map(q, SCREEN), SCREEN));
            }
        });
    });

    group.bench_function("affine", |b| {
        b.iter(|| {
            let affine = t.map_to_screen_affine(SCREEN);
            for &p in &points {
                black_box(affine * p);
            }
        });
    });

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");

    // Hypothesis: a pinch move costs about the same as a pan move; both are a
    // handful of float ops plus the listener call.
    for len in [64usize, 1_024] {
        group.bench_with_input(BenchmarkId::new("pan_stream", len), &len, |b, &len| {
            b.iter_batched(
                || Viewport::new(MemoryScaleStore::new(10.0), SCREEN),
                |mut vp| {
                    vp.on_pan_start(Point::new(960.0, 540.0));
                    for i in 0..len {
                        vp.on_pan_move(Point::new(960.0 - i as f64, 540.0 + i as f64 * 0.5));
                    }
                    vp.on_pan_end();
                    black_box(vp.center());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pinch_stream", len), &len, |b, &len| {
            b.iter_batched(
                || Viewport::new(MemoryScaleStore::new(10.0), SCREEN),
                |mut vp| {
                    let left = Point::new(800.0, 540.0);
                    vp.on_touch_start(&[left, Point::new(1000.0, 540.0)]);
                    for i in 0..len {
                        let spread = 200.0 + (i % 200) as f64;
                        vp.on_touch_move(&[left, Point::new(800.0 + spread, 540.0)]);
                    }
                    vp.on_touch_end(&[]);
                    black_box(vp.scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("tracker_touch_routing", |b| {
        let touches = [Point::new(10.0, 10.0), Point::new(90.0, 10.0)];
        b.iter(|| {
            let mut tracker = GestureTracker::new();
            tracker.touch_start(&touches, Point::ORIGIN);
            black_box(tracker.touch_move(&touches, Point::ORIGIN, 1.0));
            tracker.touch_end(&touches[..1], Point::ORIGIN);
            black_box(tracker.touch_move(&touches[..1], Point::ORIGIN, 1.0));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transform, bench_gestures);
criterion_main!(benches);
