//! Criterion benchmarks for the square-root strategies.
//! Inputs: a fixed batch of positive f64 values spanning 1e-6..1e6.
//! Results: under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use coord2::sqrt::{fast_inv_sqrt, Exact, Fast, SqrtStrategy};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sample_inputs(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.gen_range(1.0..10.0) * 10f64.powf(rng.gen_range(-6.0..6.0)))
        .collect()
}

fn run_strategy<S: SqrtStrategy>(s: &S, xs: &[f64]) -> f64 {
    xs.iter().map(|&v| s.sqrt(v)).sum()
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");
    for &n in &[16usize, 256, 4096] {
        let xs = sample_inputs(n, 42);
        group.bench_with_input(BenchmarkId::new("exact", n), &xs, |b, xs| {
            b.iter(|| run_strategy(&Exact, black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("fast", n), &xs, |b, xs| {
            b.iter(|| run_strategy(&Fast, black_box(xs)))
        });
    }
    group.bench_function("fast_inv_sqrt_f32", |b| {
        b.iter(|| fast_inv_sqrt(black_box(2.0f32)))
    });
    group.finish();
}

criterion_group!(benches, bench_sqrt);
criterion_main!(benches);
