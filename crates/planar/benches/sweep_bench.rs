//! Criterion benchmarks for segment intersection.
//! Focus sizes: n in {10, 50, 200, 500} short random segments.
//! Compares the Bentley-Ottmann sweep against the all-pairs baseline.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use planar::geom2::{GeomCfg, Segment};
use planar::sweep::{bentley_ottmann, brute_force_intersections};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(n: usize, seed: u64) -> Vec<Segment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let a = Vector2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        let d = Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        if let Ok(s) = Segment::new(a, a + d) {
            out.push(s);
        }
    }
    out
}

fn bench_sweep(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let mut group = c.benchmark_group("sweep");
    for &n in &[10usize, 50, 200, 500] {
        group.bench_with_input(BenchmarkId::new("bentley_ottmann", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 7),
                |segs| {
                    let _x = bentley_ottmann(&segs, cfg);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 7),
                |segs| {
                    let _x = brute_force_intersections(&segs, cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
