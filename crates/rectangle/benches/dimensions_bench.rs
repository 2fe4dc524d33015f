//! Criterion benchmarks for the rectangle dimension walk.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rectangle::{Dimension, Rectangle};

fn random_rects(n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Rectangle::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000)))
        .collect()
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.bench_function("walk_sum", |b| {
        b.iter_batched(
            || random_rects(1024, 43),
            |rects| {
                let mut acc = 0i64;
                for r in &rects {
                    for d in r {
                        acc = acc.wrapping_add(d.value());
                    }
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("to_dimensions", |b| {
        let r = Rectangle::new(10, 5);
        b.iter(|| {
            let dims: [Dimension; 2] = black_box(&r).to_dimensions();
            black_box(dims)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_dimensions);
criterion_main!(benches);
