//! Criterion benchmarks for whole simulation runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridlock_bench::{reference_profile, stress_profile};
use gridlock_engine::Simulation;

fn bench_run_reference(c: &mut Criterion) {
    let field = reference_profile(42).build().unwrap();

    c.bench_function("run_64x64_16v", |b| {
        b.iter_batched(
            || Simulation::new(field.clone()),
            |mut sim| black_box(sim.run()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_run_stress(c: &mut Criterion) {
    let field = stress_profile(42).build().unwrap();

    c.bench_function("run_256x256_64v", |b| {
        b.iter_batched(
            || Simulation::new(field.clone()),
            |mut sim| black_box(sim.run()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_build_stress(c: &mut Criterion) {
    let config = stress_profile(42);

    c.bench_function("build_256x256_64v", |b| {
        b.iter(|| black_box(&config).build().unwrap());
    });
}

criterion_group!(
    benches,
    bench_run_reference,
    bench_run_stress,
    bench_build_stress
);
criterion_main!(benches);
