// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use slideway_pager::{
    Pager, PagerConfig, ResizeDispatcher, Stepping, VecTrack, compute_metrics,
};

fn bench_compute_metrics(c: &mut Criterion) {
    let config = PagerConfig::card_carousel();
    let widths: Vec<f64> = (0..1_024).map(|i| 320.0 + f64::from(i)).collect();

    let mut group = c.benchmark_group("pager/compute_metrics");
    group.throughput(Throughput::Elements(widths.len() as u64));
    group.bench_function("card_carousel_sweep", |b| {
        b.iter(|| {
            for &w in &widths {
                black_box(compute_metrics(
                    w,
                    &config.breakpoints,
                    12,
                    config.gap,
                    config.peek,
                ));
            }
        });
    });
    group.finish();
}

fn bench_relayout_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/relayout_storm");

    // Widths oscillate across breakpoints, so every relayout may reclamp.
    for items in [6usize, 24, 96] {
        let widths: Vec<f64> = (0..256)
            .map(|i| if i % 2 == 0 { 500.0 } else { 1_100.0 })
            .collect();
        group.throughput(Throughput::Elements(widths.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(items), &widths, |b, widths| {
            b.iter_batched(
                || {
                    let mut pager = Pager::mount(
                        PagerConfig::card_carousel(),
                        Some(VecTrack::new(0..items)),
                        1_100.0,
                    )
                    .unwrap();
                    pager.forward(0);
                    while let Some(now) = pager.next_deadline() {
                        pager.tick(now);
                    }
                    pager
                },
                |mut pager| {
                    for &w in widths {
                        black_box(pager.relayout(w));
                    }
                    pager
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/walk");

    // Each step runs a full slide: clone, frames, settle, button lock.
    for (name, stepping) in [
        ("transition", Stepping::Transition),
        ("frames", Stepping::frames()),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    Pager::mount(
                        PagerConfig::card_carousel().with_stepping(stepping),
                        Some(VecTrack::new(0..32_u32)),
                        800.0,
                    )
                    .unwrap()
                },
                |mut pager| {
                    let mut now = 0;
                    while !pager.position().at_end() {
                        pager.forward(now);
                        while let Some(due) = pager.next_deadline() {
                            now = due;
                            pager.tick(now);
                        }
                    }
                    pager
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resize_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/resize_fanout");

    for pagers in [4usize, 32, 256] {
        group.throughput(Throughput::Elements(pagers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pagers),
            &pagers,
            |b, &pagers| {
                b.iter_batched(
                    || {
                        let mut dispatcher = ResizeDispatcher::default();
                        for _ in 0..pagers {
                            dispatcher.subscribe();
                        }
                        dispatcher
                    },
                    |mut dispatcher| {
                        for now in 0..64 {
                            dispatcher.on_resize(now * 4);
                        }
                        black_box(dispatcher.poll(1_000));
                        dispatcher
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_metrics,
    bench_relayout_storm,
    bench_walk,
    bench_resize_fanout
);
criterion_main!(benches);
