//! Estimation benchmarks.
//!
//! Run with: `cargo bench --package tripcost-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tripcost_bench::{benchmark_trips, configuration_grid};
use tripcost_lib::prelude::*;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::global();
    let mut group = c.benchmark_group("estimate");

    for trip in benchmark_trips() {
        group.bench_with_input(BenchmarkId::from_parameter(trip.name), &trip.config, |b, config| {
            b.iter(|| estimator.estimate(black_box(config)));
        });
    }

    let grid = configuration_grid();
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("full-grid", |b| {
        b.iter(|| {
            for config in &grid {
                let _ = black_box(estimator.estimate(config));
            }
        });
    });

    group.finish();
}

fn compare_benchmark(c: &mut Criterion) {
    let estimator = Estimator::global();
    let config = TripConfiguration::default().with_month(Month::Mar);

    c.bench_function("compare/dubai-abudhabi", |b| {
        b.iter(|| {
            estimator.compare(
                black_box(Destination::Dubai),
                black_box(Destination::AbuDhabi),
                &config,
            )
        });
    });
}

criterion_group!(benches, estimate_benchmark, compare_benchmark);
criterion_main!(benches);
