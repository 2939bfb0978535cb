//! Criterion benchmarks for levy-calc.
//!
//! Covers: fee calculation in each tier and chart series generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use levy_calc::engine::FeeEngine;
use levy_calc::series::generate_series_with;
use levy_core::traits::FeeCalculator;

fn bench_calculate_no_fee(c: &mut Criterion) {
    let engine = FeeEngine::new();

    c.bench_function("calculate_no_fee", |b| {
        b.iter(|| engine.calculate(black_box(60.0), black_box(100.0)))
    });
}

fn bench_calculate_top_tier(c: &mut Criterion) {
    let engine = FeeEngine::new();
    // All three tiers contribute.
    c.bench_function("calculate_top_tier", |b| {
        b.iter(|| engine.calculate(black_box(95.0), black_box(200.0)))
    });
}

fn bench_generate_series(c: &mut Criterion) {
    let engine = FeeEngine::new();

    c.bench_function("generate_series", |b| {
        b.iter(|| generate_series_with(&engine, black_box(100.0), black_box(85.0)))
    });
}

criterion_group!(
    benches,
    bench_calculate_no_fee,
    bench_calculate_top_tier,
    bench_generate_series,
);
criterion_main!(benches);
