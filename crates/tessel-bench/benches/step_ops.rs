//! Criterion micro-benchmarks for stepping and neighbour counting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_bench::{reference_profile, seeded_engine, stress_profile};
use tessel_core::Coord;
use tessel_engine::tick::count_live_neighbours;
use tessel_space::{EdgeBehavior, Square8};

/// Benchmark: one generation of a random 256x256 soup.
fn bench_step_reference(c: &mut Criterion) {
    let mut engine = seeded_engine(reference_profile(42)).unwrap();

    c.bench_function("step_256x256_absorb", |b| {
        b.iter(|| {
            engine.step();
            black_box(engine.generation());
        });
    });
}

/// Benchmark: one generation of a random 1024x1024 torus.
fn bench_step_stress(c: &mut Criterion) {
    let mut engine = seeded_engine(stress_profile(42)).unwrap();

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("step_1024x1024_wrap", |b| {
        b.iter(|| {
            engine.step();
            black_box(engine.generation());
        });
    });
    group.finish();
}

/// Benchmark: resolve neighbours for every cell of a 256x256 grid.
fn bench_neighbours(c: &mut Criterion) {
    let grid = Square8::new(256, 256).unwrap();

    for edge in [EdgeBehavior::Absorb, EdgeBehavior::Wrap] {
        c.bench_function(&format!("neighbours_256x256_{edge}"), |b| {
            b.iter(|| {
                for y in 0..256i32 {
                    for x in 0..256i32 {
                        black_box(grid.neighbours(Coord::new(x, y), edge));
                    }
                }
            });
        });
    }
}

/// Benchmark: count live neighbours across a random 256x256 soup.
fn bench_count_live(c: &mut Criterion) {
    let engine = seeded_engine(reference_profile(7)).unwrap();
    let view = engine.get_cells();

    c.bench_function("count_live_256x256_wrap", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for coord in view.grid().canonical_ordering() {
                total += count_live_neighbours(&view, coord, EdgeBehavior::Wrap);
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_stress,
    bench_neighbours,
    bench_count_live
);
criterion_main!(benches);
