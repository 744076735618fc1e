//! # Trend Analysis Benchmarks
//!
//! Measures derivative analysis and danger scan over simulated series.
//!
//! Run: `cargo bench --bench analyze_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use atmos_core::EnvironmentConfig;
use atmos_simulator::simulate;
use atmos_trend::{analyze, danger_scan, summarize};

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend");

    for minutes in [180.0, 1_440.0, 10_080.0] {
        let config = EnvironmentConfig { people: 8, duration_min: minutes, ..Default::default() };
        let Ok(series) = simulate(&config) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("analyze", series.len()), &series, |b, s| {
            b.iter(|| black_box(analyze(s)))
        });
        group.bench_with_input(BenchmarkId::new("danger_scan", series.len()), &series, |b, s| {
            b.iter(|| black_box(danger_scan(s)))
        });
        group.bench_with_input(BenchmarkId::new("summarize", series.len()), &series, |b, s| {
            b.iter(|| black_box(summarize(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
