// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer matrices.
//!
//! Triangles are stored ragged (row `i` holds `i + 1` entries). The helpers
//! here move between that form and zero-padded square matrices, and
//! [`inverse`] inverts lower-triangular matrices without ever leaving exact
//! arithmetic.

pub mod inverse;

pub use inverse::{invert_matrix, invert_triangle, InversionFailure};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// One row of exact integers.
pub type Row = Vec<BigInt>;

/// The `size × size` identity matrix.
pub fn identity(size: usize) -> Vec<Row> {
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i == j { BigInt::one() } else { BigInt::zero() })
                .collect()
        })
        .collect()
}

/// Zero-pad ragged rows into a `size × size` square matrix.
///
/// Rows longer than `size` are truncated; missing rows become zero rows.
pub fn pad_square(rows: &[Row], size: usize) -> Vec<Row> {
    (0..size)
        .map(|i| {
            let row = rows.get(i);
            (0..size)
                .map(|j| {
                    row.and_then(|r| r.get(j))
                        .cloned()
                        .unwrap_or_else(BigInt::zero)
                })
                .collect()
        })
        .collect()
}

/// Product of two square matrices of the same size.
///
/// # Panics
///
/// Panics if the operands are not square or differ in size.
pub fn multiply(a: &[Row], b: &[Row]) -> Vec<Row> {
    let size = a.len();
    assert_eq!(b.len(), size, "matrix sizes differ: {} vs {}", size, b.len());
    for (i, row) in a.iter().chain(b.iter()).enumerate() {
        assert_eq!(row.len(), size, "row {} is not of length {}", i % size, size);
    }

    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    (0..size).fold(BigInt::zero(), |acc, k| acc + &a[i][k] * &b[k][j])
                })
                .collect()
        })
        .collect()
}

/// Convert small integers into a ragged table, for tests and fixtures.
pub fn from_i64(rows: &[&[i64]]) -> Vec<Row> {
    rows.iter()
        .map(|r| r.iter().map(|&v| BigInt::from(v)).collect())
        .collect()
}
