//! Aggregation, validation and rolling prediction benchmarks.
//!
//! Run with: `cargo bench --package tempcast-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tempcast_bench::synthetic_readings;
use tempcast_lib::{Granularity, aggregate, rolling_all, validate_all};

fn aggregation_benchmark(c: &mut Criterion) {
    let readings = synthetic_readings(1980, 10);

    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(readings.len() as u64));

    for granularity in Granularity::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(granularity),
            granularity,
            |b, &granularity| b.iter(|| aggregate(black_box(&readings), granularity)),
        );
    }

    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    let readings = synthetic_readings(1980, 40);

    let mut group = c.benchmark_group("validate_all");

    for granularity in [Granularity::Yearly, Granularity::Monthly] {
        let bars = aggregate(&readings, granularity);
        group.throughput(Throughput::Elements(bars.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(granularity), &bars, |b, bars| {
            b.iter(|| validate_all(black_box(bars), 3));
        });
    }

    group.finish();
}

fn rolling_benchmark(c: &mut Criterion) {
    let readings = synthetic_readings(1980, 40);
    let bars = aggregate(&readings, Granularity::Monthly);

    c.bench_function("rolling_all/monthly", |b| {
        b.iter(|| rolling_all(black_box(&bars), 3));
    });
}

criterion_group!(
    benches,
    aggregation_benchmark,
    validation_benchmark,
    rolling_benchmark
);
criterion_main!(benches);
