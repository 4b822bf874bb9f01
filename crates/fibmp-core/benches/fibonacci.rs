//! Criterion benchmarks for the Fibonacci strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibmp_core::{DefaultFactory, StrategyFactory};

fn bench_strategies(c: &mut Criterion) {
    let factory = DefaultFactory::new();

    for name in ["doubling", "matrix3", "matrix2"] {
        let Ok(strategy) = factory.get(name) else {
            continue;
        };
        let mut group = c.benchmark_group(name);
        for n in [100u64, 1_000, 10_000, 100_000] {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| strategy.compute(n));
            });
        }
        group.finish();
    }

    // Linear is O(n) big additions; keep it to small indices.
    if let Ok(linear) = factory.get("linear") {
        let mut group = c.benchmark_group("linear");
        for n in [100u64, 1_000, 10_000] {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| linear.compute(n));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
