//! # Simulator Benchmarks
//!
//! Measures grid generation and full simulation for growing series lengths.
//!
//! Run: `cargo bench --bench simulate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use atmos_core::EnvironmentConfig;
use atmos_simulator::{simulate, time_grid};

fn config(points: usize) -> EnvironmentConfig {
    EnvironmentConfig {
        people: 5,
        plants: 3,
        air_changes_per_hour: 1.0,
        duration_min: (points - 1) as f64,
        dt_min: 1.0,
        ..Default::default()
    }
}

fn bench_time_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_grid");

    for points in [181, 1_441, 10_081] {
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &points| {
            b.iter(|| black_box(time_grid(black_box((points - 1) as f64), 1.0)))
        });
    }

    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for points in [181, 1_441, 10_081] {
        let config = config(points);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &config, |b, config| {
            b.iter(|| black_box(simulate(black_box(config))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_time_grid, bench_simulate);
criterion_main!(benches);
