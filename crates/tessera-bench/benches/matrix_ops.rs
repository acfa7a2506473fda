//! Criterion micro-benchmarks for dense matrix construction, access and
//! addition.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessera_bench::{random_matrix, DEFAULT_SEED};
use tessera_matrix::DenseMatrix;

/// Benchmark: build a zeroed 100x100 matrix.
fn bench_new_100x100(c: &mut Criterion) {
    c.bench_function("matrix_new_100x100", |b| {
        b.iter(|| black_box(DenseMatrix::<i64>::new(100, 100)));
    });
}

/// Benchmark: add two random 100x100 matrices.
fn bench_add_100x100(c: &mut Criterion) {
    let a = random_matrix(100, 100, DEFAULT_SEED);
    let m = random_matrix(100, 100, DEFAULT_SEED ^ 1);
    c.bench_function("matrix_add_100x100", |b| {
        b.iter(|| black_box(&a + &m));
    });
}

/// Benchmark: checked read of every element of a 100x100 matrix.
fn bench_checked_get_100x100(c: &mut Criterion) {
    let a = random_matrix(100, 100, DEFAULT_SEED);
    c.bench_function("matrix_checked_get_100x100", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..a.rows() {
                for j in 0..a.cols() {
                    if let Ok(value) = a.get(i, j) {
                        sum += value;
                    }
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_new_100x100,
    bench_add_100x100,
    bench_checked_get_100x100
);
criterion_main!(benches);
