//! Criterion benchmarks for lattice rotation and overlap reduction.
//! Focus sizes: d in {10, 50, 100, 200} points per axis.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p slitpore

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use slitpore::prelude::*;

fn reference_slit_grid(d: usize) -> PointGrid {
    let slit = Extent::new(1.0, 10.0, -0.5, 0.5).unwrap();
    make_grid(&slit, d).unwrap()
}

fn bench_overlap(c: &mut Criterion) {
    let pore = Extent::new(5.0, 6.0, 5.0, 6.0).unwrap();
    let mut group = c.benchmark_group("overlap");
    for &d in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("rotate", d), &d, |b, &d| {
            let grid = reference_slit_grid(d);
            let mut rng = StdRng::seed_from_u64(43);
            b.iter_batched(
                || rng.gen_range(0.0..std::f64::consts::FRAC_PI_2),
                |theta| {
                    let _r = rotate(&grid, theta);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("overlap_percentage", d),
            &d,
            |b, &d| {
                let rotated = rotate(&reference_slit_grid(d), 0.3);
                b.iter(|| overlap_percentage(&rotated, &pore).unwrap())
            },
        );

        group.bench_with_input(BenchmarkId::new("sweep_50_frames", d), &d, |b, &d| {
            let grid = reference_slit_grid(d);
            b.iter(|| {
                sweep(&grid, &pore, angle_sweep(50))
                    .unwrap()
                    .map(|f| f.overlap_pct)
                    .sum::<f64>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlap);
criterion_main!(benches);
