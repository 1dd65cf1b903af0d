//! Criterion benchmarks for the batching and rod-cutting routines.
//!
//! Inputs are random but seeded, so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_batchcut::batching::{schedule, Constraints, PrintJob};
use u_batchcut::rod::{DpStrategy, RodCutter};

fn random_jobs(n: usize, rng: &mut StdRng) -> Vec<PrintJob> {
    (0..n)
        .map(|i| {
            PrintJob::new(
                format!("J{i}"),
                rng.random_range(1.0..100.0),
                rng.random_range(1..=3),
                rng.random_range(10..500),
            )
            .expect("generated job is valid")
        })
        .collect()
}

fn random_prices(length: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..length).map(|_| rng.random_range(0.0..50.0)).collect()
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    let mut rng = StdRng::seed_from_u64(42);
    let constraints = Constraints::new(300.0, 4);

    for &n in &[100, 1_000, 10_000] {
        let jobs = random_jobs(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &jobs, |b, jobs| {
            b.iter(|| {
                let result = schedule(black_box(jobs), black_box(&constraints));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_rod_cutting(c: &mut Criterion) {
    let mut group = c.benchmark_group("rod_cutting");
    let mut rng = StdRng::seed_from_u64(42);

    for &length in &[50, 200, 1_000] {
        let prices = random_prices(length, &mut rng);
        for (name, strategy) in [
            ("memoized", DpStrategy::Memoized),
            ("tabulated", DpStrategy::Tabulated),
        ] {
            group.bench_with_input(BenchmarkId::new(name, length), &prices, |b, prices| {
                b.iter(|| {
                    let result = RodCutter::solve(strategy, black_box(length), black_box(prices));
                    black_box(result)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_schedule, bench_rod_cutting);
criterion_main!(benches);
