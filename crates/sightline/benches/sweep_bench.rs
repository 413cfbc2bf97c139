//! Criterion benchmarks for the visibility sweep.
//! Focus sizes: blockers in {0, 10, 50, 200}.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sightline::api::{
    compute_visibility, compute_visibility_many, draw_blockers, Blocker, BlockerCount,
    BlockerIds, RandomSceneCfg, SceneReplay, SweepCfg,
};

fn scene(m: usize, seed: u64) -> Vec<Blocker> {
    let cfg = RandomSceneCfg {
        count: BlockerCount::Fixed(m),
        ..RandomSceneCfg::default()
    };
    draw_blockers(&cfg, SceneReplay { seed, index: 0 }, &mut BlockerIds::default())
        .expect("valid scene params")
}

fn origins(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..700.0)))
        .collect()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &m in &[0usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("single_query", m), &m, |b, &m| {
            let blockers = scene(m, 43);
            b.iter_batched(
                || origins(1, 44)[0],
                |o| {
                    let _poly = compute_visibility(o, &blockers).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("batch_32", m), &m, |b, &m| {
            let blockers = scene(m, 45);
            let cfg = SweepCfg::default();
            b.iter_batched(
                || origins(32, 46),
                |os| {
                    let _polys = compute_visibility_many(&os, &blockers, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
