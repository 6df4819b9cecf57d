// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_bigint::BigInt;
use tabl::matrix::{self, Row};
use tabl::triangle::{Identity, Recurrence, Triangle};

pub fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
}

/// Pascal's triangle built in the test, independent of the library.
///
/// Named after the inverse binomial so that it claims invertibility.
pub fn pascal() -> Triangle {
    let gen = Recurrence::new("Pascal", |n, previous| {
        if n == 0 {
            return vec![BigInt::from(1)];
        }
        let last = &previous[n - 1];
        let mut row = vec![BigInt::from(1); n + 1];
        for k in 1..n {
            row[k] = &last[k - 1] + &last[k];
        }
        row
    });
    Triangle::new(gen, Identity::new("Pascal").with_inverse("A130595"))
}

/// `T(n, k) = 10 n + k`, so every term names its own position.
pub fn labelled() -> Triangle {
    Triangle::from_fn("Labelled", |n| {
        (0..=n).map(|k| BigInt::from(10 * n + k)).collect()
    })
}

/// Whether `rows` times `inverse` is the identity of size `size`.
pub fn is_round_trip(rows: &[Row], inverse: &[Row], size: usize) -> bool {
    matrix::multiply(
        &matrix::pad_square(rows, size),
        &matrix::pad_square(inverse, size),
    ) == matrix::identity(size)
}
