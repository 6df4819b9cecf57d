// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact inversion of lower-triangular integer matrices.
//!
//! Gauss–Jordan elimination runs over [`BigRational`] on the augmented
//! matrix `[M | I]`. Because `M` is lower triangular the pivots are simply
//! the diagonal entries and no row exchanges are needed. The result is
//! accepted only when every entry is an integer.
//!
//! # Examples
//!
//! ```
//! use tabl::matrix::{from_i64, invert_triangle};
//!
//! let binomial = from_i64(&[&[1], &[1, 1], &[1, 2, 1]]);
//! let inverse = invert_triangle(&binomial).unwrap();
//! assert_eq!(inverse, from_i64(&[&[1], &[-1, 1], &[1, -2, 1]]));
//! ```

use super::Row;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use thiserror::Error;

/// Reasons a matrix has no integral inverse.
///
/// None of these is exceptional for a triangle: most triangles are simply
/// not invertible over the integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InversionFailure {
    /// A zero on the diagonal.
    #[error("singular matrix: zero pivot in row {row}")]
    Singular { row: usize },

    /// The rational inverse has a fractional entry.
    #[error("inverse is not integral at ({row}, {col})")]
    NonIntegral { row: usize, col: usize },

    /// A row has the wrong number of entries for its shape.
    #[error("row {row} has {len} entries, expected {expected}")]
    Malformed {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A nonzero entry above the diagonal.
    #[error("matrix is not lower triangular: nonzero entry at ({row}, {col})")]
    NotLowerTriangular { row: usize, col: usize },
}

/// Invert a triangle given as ragged rows (row `i` has `i + 1` entries).
///
/// Returns the inverse in the same ragged form. An empty input has the
/// empty inverse.
pub fn invert_triangle(rows: &[Row]) -> Result<Vec<Row>, InversionFailure> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != i + 1 {
            return Err(InversionFailure::Malformed {
                row: i,
                len: row.len(),
                expected: i + 1,
            });
        }
    }
    eliminate(rows)
}

/// Invert a square lower-triangular matrix.
///
/// The result is square and zero above the diagonal.
pub fn invert_matrix(matrix: &[Row]) -> Result<Vec<Row>, InversionFailure> {
    let size = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != size {
            return Err(InversionFailure::Malformed {
                row: i,
                len: row.len(),
                expected: size,
            });
        }
        if let Some(col) = (i + 1..size).find(|&j| !row[j].is_zero()) {
            return Err(InversionFailure::NotLowerTriangular { row: i, col });
        }
    }

    let ragged: Vec<Row> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| row[..=i].to_vec())
        .collect();
    let inverse = eliminate(&ragged)?;
    Ok(super::pad_square(&inverse, size))
}

/// Gauss–Jordan elimination on `[M | I]`, `M` ragged lower triangular.
fn eliminate(rows: &[Row]) -> Result<Vec<Row>, InversionFailure> {
    let size = rows.len();
    let ratio = |v: &BigInt| BigRational::from_integer(v.clone());

    // Working copy of M, zero padded.
    let mut m: Vec<Vec<BigRational>> = rows
        .iter()
        .map(|row| {
            let mut r: Vec<BigRational> = row.iter().map(ratio).collect();
            r.resize(size, BigRational::zero());
            r
        })
        .collect();
    let mut inv: Vec<Vec<BigRational>> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    if i == j {
                        BigRational::one()
                    } else {
                        BigRational::zero()
                    }
                })
                .collect()
        })
        .collect();

    for pivot_row in 0..size {
        let pivot = m[pivot_row][pivot_row].clone();
        if pivot.is_zero() {
            return Err(InversionFailure::Singular { row: pivot_row });
        }

        // Normalize the pivot row; only columns 0..=pivot_row are nonzero.
        for j in 0..=pivot_row {
            m[pivot_row][j] = &m[pivot_row][j] / &pivot;
            inv[pivot_row][j] = &inv[pivot_row][j] / &pivot;
        }

        // Clear the pivot column below the pivot.
        for i in pivot_row + 1..size {
            let factor = m[i][pivot_row].clone();
            if factor.is_zero() {
                continue;
            }
            for j in 0..=pivot_row {
                let dm = &factor * &m[pivot_row][j];
                m[i][j] = &m[i][j] - dm;
                let di = &factor * &inv[pivot_row][j];
                inv[i][j] = &inv[i][j] - di;
            }
        }
    }

    inv.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .take(i + 1)
                .enumerate()
                .map(|(j, v)| {
                    if v.is_integer() {
                        Ok(v.to_integer())
                    } else {
                        Err(InversionFailure::NonIntegral { row: i, col: j })
                    }
                })
                .collect::<Result<Row, _>>()
        })
        .collect()
}
