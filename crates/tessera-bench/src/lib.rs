//! Workload builders for the Tessera benchmarks.
//!
//! Every workload is derived from a seed so runs are comparable:
//!
//! - [`filled_array`]: `0..n` pushed one element at a time
//! - [`insert_positions`] / [`erase_positions`]: valid random positions
//!   for a sequence of positional inserts or erases
//! - [`random_matrix`]: a matrix of small random integers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tessera_array::DynamicArray;
use tessera_matrix::DenseMatrix;

/// Seed used by the benches unless they need several independent streams.
pub const DEFAULT_SEED: u64 = 0x7e55_e7a0;

/// Build `0..n` through `push_back`, so capacity follows the growth law.
pub fn filled_array(n: usize) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for i in 0..n as u64 {
        arr.push_back(i);
    }
    arr
}

/// Positions for `count` successive inserts into an array that starts with
/// `initial_len` elements. Position `k` is valid for length
/// `initial_len + k`.
pub fn insert_positions(initial_len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|k| rng.random_range(0..=initial_len + k))
        .collect()
}

/// Positions for erasing every element of an array of length `len`, one
/// at a time. Position `k` is valid for length `len - k`.
pub fn erase_positions(len: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|k| rng.random_range(0..len - k)).collect()
}

/// A `rows` x `cols` matrix of integers in `-100..100`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> DenseMatrix<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(-100..100)).collect())
        .collect();
    match DenseMatrix::from_rows(data) {
        Ok(matrix) => matrix,
        Err(err) => unreachable!("generated rows are uniform: {err}"),
    }
}
