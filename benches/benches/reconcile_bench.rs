//! # Reconciler Benchmarks
//!
//! Measures uncertainty reconciliation for each shape policy and the stitch
//! onto a simulated series.
//!
//! Run: `cargo bench --bench reconcile_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use atmos_core::{EnvironmentConfig, UncertaintyArray};
use atmos_forecast::{reconcile, stitch};
use atmos_simulator::simulate;

const N: usize = 1_000;

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    let predictions = vec![[20.5, 0.06]; N];

    let vector = UncertaintyArray::vector(vec![0.1; N]);
    let column = UncertaintyArray::zeros(vec![N, 1]);
    let per_gas = UncertaintyArray::zeros(vec![N, 2]);
    let short = UncertaintyArray::vector(vec![0.1; N / 2]);
    let long = UncertaintyArray::vector(vec![0.1; N * 2]);

    group.bench_function("vector", |b| b.iter(|| black_box(reconcile(&predictions, &vector))));
    group.bench_function("column", |b| b.iter(|| black_box(reconcile(&predictions, &column))));
    group.bench_function("per_gas", |b| b.iter(|| black_box(reconcile(&predictions, &per_gas))));
    group.bench_function("pad", |b| b.iter(|| black_box(reconcile(&predictions, &short))));
    group.bench_function("truncate", |b| b.iter(|| black_box(reconcile(&predictions, &long))));

    group.finish();
}

fn bench_stitch(c: &mut Criterion) {
    let config = EnvironmentConfig { duration_min: 1_440.0, ..Default::default() };
    let Ok(sim) = simulate(&config) else {
        return;
    };
    let predictions = vec![[20.5, 0.06]; N];
    let uncertainty = vec![0.1; N];

    c.bench_function("stitch_1000", |b| {
        b.iter(|| black_box(stitch(&sim, &predictions, &uncertainty, config.dt_min)))
    });
}

criterion_group!(benches, bench_reconcile, bench_stitch);
criterion_main!(benches);
