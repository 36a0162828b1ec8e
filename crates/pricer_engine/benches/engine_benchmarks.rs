//! Criterion benchmarks comparing the three scheduling disciplines.
//!
//! Measures end-to-end pricing throughput for each discipline across
//! simulation counts to characterise scheduling overhead and scaling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_engine::config::{EngineConfig, Strategy};
use pricer_engine::portfolio::{Asset, Portfolio};
use pricer_engine::schedule::run;

fn bench_portfolio() -> Portfolio {
    Portfolio::new(vec![
        Asset::new("AAA", 1200.0, 0.4, 0.05, 0.20).unwrap(),
        Asset::new("BBB", 1800.0, 0.35, 0.03, 0.25).unwrap(),
        Asset::new("CCC", 900.0, 0.25, 0.04, 0.30).unwrap(),
    ])
    .unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let portfolio = bench_portfolio();
    let mut group = c.benchmark_group("scheduling_disciplines");

    for n_simulations in [1_000, 10_000] {
        for strategy in [
            Strategy::Sequential,
            Strategy::WorkerPool,
            Strategy::WorkStealing,
        ] {
            let config = EngineConfig::builder()
                .strategy(strategy)
                .strike(2000.0)
                .n_steps(50)
                .n_simulations(n_simulations)
                .n_workers(4)
                .build()
                .expect("valid bench configuration");

            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), n_simulations),
                &config,
                |b, config| {
                    b.iter(|| run(black_box(&portfolio), black_box(config)).expect("run succeeds"));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
