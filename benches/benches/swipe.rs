// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use slideway_gesture::swipe::{SwipeRecognizer, SwipeThresholds};

fn bench_classify(c: &mut Criterion) {
    // Mixed touches: swipes both ways, taps, slow drags and vertical scrolls.
    let samples: Vec<(Point, Point, u64)> = (0..1_024_u32)
        .map(|i| {
            let f = f64::from(i % 97);
            let start = Point::new(200.0, 300.0);
            let end = match i % 5 {
                0 => Point::new(200.0 + 20.0 + f, 300.0),
                1 => Point::new(200.0 - 20.0 - f, 300.0),
                2 => Point::new(200.0 + f / 10.0, 300.0),
                3 => Point::new(200.0 + 40.0, 300.0 + 80.0 + f),
                _ => Point::new(200.0 - 60.0, 300.0),
            };
            let elapsed = if i % 7 == 0 { 150 } else { u64::from(i % 100) };
            (start, end, elapsed)
        })
        .collect();

    let mut group = c.benchmark_group("gesture/classify");
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("mixed", |b| {
        let mut recognizer = SwipeRecognizer::new(SwipeThresholds::DEFAULT);
        b.iter(|| {
            for &(start, end, elapsed) in &samples {
                recognizer.on_start(start, 0);
                black_box(recognizer.on_end(end, elapsed));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
