//! Euclidean vs binary gcd on the pair grid the pi estimator walks.
//!
//! Run with: cargo bench --bench gcd

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lib::{gcd, gcd_binary};

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd");

    let n = 256u64;
    let pairs: Vec<(u64, u64)> = (1..=n)
        .flat_map(|a| (1..=n).map(move |b| (a, b)))
        .collect();
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("euclidean", |b| {
        b.iter(|| {
            let mut coprime = 0u64;
            for &(x, y) in &pairs {
                if gcd(black_box(x), black_box(y)) == 1 {
                    coprime += 1;
                }
            }
            coprime
        })
    });

    group.bench_function("binary", |b| {
        b.iter(|| {
            let mut coprime = 0u64;
            for &(x, y) in &pairs {
                if gcd_binary(black_box(x), black_box(y)) == 1 {
                    coprime += 1;
                }
            }
            coprime
        })
    });

    group.finish();
}

criterion_group!(benches, bench_gcd);
criterion_main!(benches);
