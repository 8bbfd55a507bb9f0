// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_slider::{
    Handle, RangeController, RangeLayout, Selection, SliderBounds, TrackGeometry,
    offset_to_value, step_markers,
};

fn bench_offset_to_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/offset_to_value");
    let bounds = SliderBounds::new(0.0, 100.0).unwrap();
    let geometry = TrackGeometry::new(1028.0, 28.0);
    let pointers: Vec<f64> = (0..1_024).map(|i| f64::from(i) - 12.0).collect();
    group.throughput(Throughput::Elements(pointers.len() as u64));

    for (name, step) in [("continuous", None), ("stepped", Some(5.0))] {
        group.bench_with_input(BenchmarkId::new(name, pointers.len()), &pointers, |b, xs| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in xs {
                    acc += offset_to_value(black_box(x), &bounds, &geometry, step);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_range_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/range_gesture");
    let bounds = SliderBounds::new(0.0, 100.0).unwrap();
    let geometry = TrackGeometry::new(1028.0, 28.0);

    // Hypothesis: one drag move is a handful of float ops; a full sweep is
    // dominated by the per-move mapping, not by session bookkeeping.
    for moves in [16usize, 256, 4_096] {
        let xs: Vec<f64> = (0..moves).map(|i| (i % 1_000) as f64).collect();
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("lower_sweep", moves), &xs, |b, xs| {
            b.iter(|| {
                let mut controller = RangeController::new(bounds, Some(1.0));
                let mut selection = Selection::new(10.0, 90.0);
                for &x in xs {
                    black_box(controller.on_drag(Handle::Lower, x, &geometry, &mut selection));
                }
                controller.on_drag_end(Handle::Lower);
                black_box(RangeLayout::compute(selection, &bounds, &geometry))
            });
        });
    }

    group.finish();
}

fn bench_step_markers(c: &mut Criterion) {
    let bounds = SliderBounds::new(0.0, 100.0).unwrap();
    let geometry = TrackGeometry::new(1028.0, 28.0);
    c.bench_function("slider/step_markers", |b| {
        b.iter(|| step_markers(&bounds, black_box(Some(0.5)), &geometry).sum::<f64>());
    });
}

criterion_group!(
    benches,
    bench_offset_to_value,
    bench_range_gesture,
    bench_step_markers
);
criterion_main!(benches);
