// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer triangles.
//!
//! A [`Triangle`] wraps a row generator together with the identity of the
//! sequence it generates, and derives every other view from the rows:
//! columns, diagonals, antidiagonals, sums, polynomial values, transforms
//! and the exact matrix inverse.
//!
//! # Indexing
//!
//! Indexing is always `(0, 0)`-based:
//!
//! ```text
//! T(0,0)
//! T(1,0)  T(1,1)
//! T(2,0)  T(2,1)  T(2,2)
//! T(3,0)  T(3,1)  T(3,2)  T(3,3)
//! ```
//!
//! - `row(4)         = [T(4,0), T(4,1), T(4,2), T(4,3), T(4,4)]`
//! - `column(2, 5)   = [T(2,2), T(3,2), T(4,2), T(5,2), T(6,2)]`
//! - `diagonal(2, 5) = [T(2,0), T(3,1), T(4,2), T(5,3), T(6,4)]`
//! - `antidiagonal(4) = [T(4,0), T(3,1), T(2,2)]`
//!
//! # Failure modes
//!
//! Row `n` must have exactly `n + 1` entries and entry `(n, k)` requires
//! `k <= n`. Either violation is a bug in the generator or the caller and
//! panics. Running out of integral inverse is expected and shows up as
//! `Ok(None)`; a generator refusing a row shows up as `Err`.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use tabl::library;
//!
//! let binomial = library::binomial();
//! assert_eq!(binomial.row_sum(4).unwrap(), BigInt::from(16));
//! assert_eq!(binomial.evaluate_polynomial(4, 1).unwrap(), BigInt::from(16));
//! ```

pub mod derived;
pub mod errors;
pub mod generator;

pub use derived::{Alternating, Offset, Reversed};
pub use errors::{Result, TriangleError};
pub use generator::{FnGenerator, Recurrence, RowGenerator, Step};

use crate::matrix::{self, Row};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Who a triangle is: its name and what it is known as elsewhere.
///
/// All fields are opaque strings as far as the triangle is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// Name of the triangle, e.g. `"Binomial"`.
    pub name: String,
    /// A-numbers of closely related OEIS triangles.
    pub similars: Vec<String>,
    /// A-number of the inverse triangle; empty if there is no integral inverse.
    pub inverse_id: String,
    /// Defining formula as a TeX string. Informational only.
    pub formula: String,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_similars(mut self, similars: &[&str]) -> Self {
        self.similars = similars.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_inverse(mut self, inverse_id: impl Into<String>) -> Self {
        self.inverse_id = inverse_id.into();
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }
}

/// A lower-triangular integer array generated row by row.
///
/// Conceptually immutable: every operation returns new data. The only
/// interior state is the advisory `invertible` flag, which can only ever go
/// from `true` to `false`.
pub struct Triangle {
    generator: Arc<dyn RowGenerator>,
    identity: Identity,
    invertible: AtomicBool,
}

impl Triangle {
    /// Wrap a generator. The triangle claims to be invertible iff the
    /// identity names an inverse.
    pub fn new(generator: impl RowGenerator + 'static, identity: Identity) -> Self {
        Self::from_shared(Arc::new(generator), identity)
    }

    pub fn from_shared(generator: Arc<dyn RowGenerator>, identity: Identity) -> Self {
        let invertible = !identity.inverse_id.is_empty();
        Self {
            generator,
            identity,
            invertible: AtomicBool::new(invertible),
        }
    }

    /// A triangle from a plain closure, with no metadata beyond its name.
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(usize) -> Row + Send + Sync + 'static,
    {
        Self::new(FnGenerator(f), Identity::new(name))
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn generator(&self) -> Arc<dyn RowGenerator> {
        Arc::clone(&self.generator)
    }

    /// The advisory invertibility claim.
    ///
    /// Starts as "an inverse id was given" and is revised to `false` the
    /// first time [`invert`](Self::invert) finds no integral inverse.
    pub fn is_invertible(&self) -> bool {
        self.invertible.load(Ordering::Relaxed)
    }

    // Core accessors

    /// Row `n`: `[T(n,0), ..., T(n,n)]`.
    ///
    /// # Panics
    ///
    /// Panics if the generator returns a row whose length is not `n + 1`.
    pub fn row(&self, n: usize) -> Result<Row> {
        let row = self.generator.row(n)?;
        assert_eq!(
            row.len(),
            n + 1,
            "{}: row {} has {} entries, expected {}",
            self.name(),
            n,
            row.len(),
            n + 1
        );
        Ok(row)
    }

    /// The term `T(n, k)`.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    pub fn value(&self, n: usize, k: usize) -> Result<BigInt> {
        assert!(
            k <= n,
            "{}: index ({}, {}) is outside the triangle",
            self.name(),
            n,
            k
        );
        let mut row = self.row(n)?;
        Ok(row.swap_remove(k))
    }

    /// Rows `0..size` as a ragged table.
    pub fn rows(&self, size: usize) -> Result<Vec<Row>> {
        (0..size).map(|n| self.row(n)).collect()
    }

    /// The `size × size` matrix with this triangle as its lower part.
    pub fn as_matrix(&self, size: usize) -> Result<Vec<Row>> {
        Ok(matrix::pad_square(&self.rows(size)?, size))
    }

    /// `[T(n,n), ..., T(n,0)]`.
    pub fn reversed_row(&self, n: usize) -> Result<Row> {
        let mut row = self.row(n)?;
        row.reverse();
        Ok(row)
    }

    /// `[T(n-k, k) for k in 0..=n/2]`.
    pub fn antidiagonal(&self, n: usize) -> Result<Vec<BigInt>> {
        (0..=n / 2).map(|k| self.value(n - k, k)).collect()
    }

    /// `[(-1)^k T(n, k)]`.
    pub fn alternating_row(&self, n: usize) -> Result<Row> {
        Ok(derived::alternate(self.row(n)?))
    }

    /// Prefix sums of row `n`.
    pub fn accumulated_row(&self, n: usize) -> Result<Row> {
        Ok(accumulate(&self.row(n)?))
    }

    /// `[T(n,0), T(n,1) - T(n,0), ..., T(n,n) - T(n,n-1)]`.
    ///
    /// The first term is kept, so accumulating the result gives row `n` back.
    pub fn first_differences(&self, n: usize) -> Result<Row> {
        let row = self.row(n)?;
        let mut diff = Vec::with_capacity(row.len());
        diff.push(row[0].clone());
        diff.extend(row.windows(2).map(|w| &w[1] - &w[0]));
        Ok(diff)
    }

    /// Coefficients of the derivative of the row polynomial
    /// `sum T(n,k) x^k`: `[1 T(n,1), 2 T(n,2), ..., n T(n,n)]`.
    ///
    /// Row 0 is a constant, whose derivative is written `[0]`.
    pub fn derivative(&self, n: usize) -> Result<Row> {
        let row = self.row(n)?;
        if n == 0 {
            return Ok(vec![BigInt::zero()]);
        }
        Ok(row
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| c * BigInt::from(k))
            .collect())
    }

    /// `[T(start + j, j) for j in 0..length]`.
    pub fn diagonal(&self, start: usize, length: usize) -> Result<Vec<BigInt>> {
        (0..length).map(|j| self.value(start + j, j)).collect()
    }

    /// `[T(start + j, start) for j in 0..length]`.
    pub fn column(&self, start: usize, length: usize) -> Result<Vec<BigInt>> {
        (0..length).map(|j| self.value(start + j, start)).collect()
    }

    /// Sum of row `n`.
    pub fn row_sum(&self, n: usize) -> Result<BigInt> {
        Ok(self.row(n)?.iter().sum())
    }

    /// Rows `0..size` concatenated: the triangle read by rows.
    pub fn flatten(&self, size: usize) -> Result<Vec<BigInt>> {
        Ok(self.rows(size)?.into_iter().flatten().collect())
    }

    // Derived triangles

    /// Generator of the part rooted at `(rows, cols)`:
    /// row `n` is `row(n + rows)[cols .. rows + n + 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `cols > rows`.
    pub fn offset(&self, rows: usize, cols: usize) -> Offset {
        Offset::new(self.generator(), rows, cols)
    }

    /// The sub-triangle rooted at `(rows, cols)` on the main diagonal.
    ///
    /// # Panics
    ///
    /// Panics unless `rows == cols`; any other root would give rows longer
    /// than `n + 1`.
    pub fn sub_triangle(&self, rows: usize, cols: usize) -> Triangle {
        assert_eq!(
            rows,
            cols,
            "{}: sub-triangle root ({}, {}) is not on the main diagonal",
            self.name(),
            rows,
            cols
        );
        Triangle::from_shared(
            Arc::new(self.offset(rows, cols)),
            Identity::new(format!("{}:Off", self.name())),
        )
    }

    /// The triangle with every row reversed.
    pub fn reversed(&self) -> Triangle {
        Triangle::from_shared(
            Arc::new(Reversed::new(self.generator())),
            Identity::new(format!("{}:Rev", self.name())),
        )
    }

    /// The triangle with alternating signs along each row.
    pub fn alternating(&self) -> Triangle {
        Triangle::from_shared(
            Arc::new(Alternating::new(self.generator())),
            Identity::new(format!("{}:Alt", self.name())),
        )
    }

    // Inversion

    /// The first `size` rows of the inverse triangle.
    ///
    /// Returns `Ok(None)` if the triangle does not claim to be invertible, or
    /// if inversion shows that it is not; in the latter case the claim is
    /// withdrawn for good.
    pub fn invert(&self, size: usize) -> Result<Option<Vec<Row>>> {
        if !self.is_invertible() {
            return Ok(None);
        }
        if size == 0 {
            return Ok(Some(Vec::new()));
        }

        match matrix::invert_triangle(&self.rows(size)?) {
            Ok(inverse) => Ok(Some(inverse)),
            Err(failure) => {
                debug!(
                    "[{}] no integral inverse ({}); marking as not invertible",
                    self.name(),
                    failure
                );
                self.invertible.store(false, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// The inverse, with each of its rows reversed.
    pub fn inverse_reversed_rows(&self, size: usize) -> Result<Option<Vec<Row>>> {
        Ok(self.invert(size)?.map(reverse_rows))
    }

    /// The inverse of the triangle with reversed rows.
    ///
    /// This is not the same as [`inverse_reversed_rows`](Self::inverse_reversed_rows).
    /// The invertibility claim is not consulted or changed.
    pub fn invert_reversed_rows(&self, size: usize) -> Result<Option<Vec<Row>>> {
        let rows = (0..size)
            .map(|n| self.reversed_row(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(matrix::invert_triangle(&rows).ok())
    }

    // The (1, 1)-rooted family

    /// Row `n` of the sub-triangle rooted at `(1, 1)`: `T(n+1, k+1)`.
    pub fn row_11(&self, n: usize) -> Result<Row> {
        self.offset(1, 1).row(n)
    }

    /// Row `n` of the `(1, 1)` sub-triangle, reversed.
    pub fn reversed_row_11(&self, n: usize) -> Result<Row> {
        let mut row = self.row_11(n)?;
        row.reverse();
        Ok(row)
    }

    /// Inverse of the `(1, 1)` sub-triangle.
    pub fn invert_11(&self, size: usize) -> Result<Option<Vec<Row>>> {
        let rows = (0..size)
            .map(|n| self.row_11(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(matrix::invert_triangle(&rows).ok())
    }

    /// Inverse of the `(1, 1)` sub-triangle, each row reversed.
    pub fn inverse_11_reversed_rows(&self, size: usize) -> Result<Option<Vec<Row>>> {
        Ok(self.invert_11(size)?.map(reverse_rows))
    }

    /// Inverse of the `(1, 1)` sub-triangle with reversed rows.
    pub fn invert_reversed_rows_11(&self, size: usize) -> Result<Option<Vec<Row>>> {
        let rows = (0..size)
            .map(|n| self.reversed_row_11(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(matrix::invert_triangle(&rows).ok())
    }

    // Polynomials and transforms

    /// Row `n` read as a polynomial in ascending powers, evaluated at `x`:
    /// `sum T(n,j) x^j`. `0^0` counts as 1.
    pub fn evaluate_polynomial(&self, n: usize, x: impl Into<BigInt>) -> Result<BigInt> {
        let x = x.into();
        Ok(self
            .row(n)?
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * &x + c))
    }

    /// `[sum T(n,k) s(k) for k in 0..=n] for n in 0..size`.
    ///
    /// With the binomial triangle this is the binomial transform of `s`.
    pub fn linear_transform<S>(&self, s: S, size: usize) -> Result<Vec<BigInt>>
    where
        S: Fn(usize) -> BigInt,
    {
        (0..size)
            .map(|n| {
                Ok(self
                    .row(n)?
                    .iter()
                    .enumerate()
                    .map(|(k, t)| t * s(k))
                    .sum())
            })
            .collect()
    }

    /// `[sum (-1)^(n-k) T(n,k) s(k) for k in 0..=n] for n in 0..size`.
    pub fn inverse_linear_transform<S>(&self, s: S, size: usize) -> Result<Vec<BigInt>>
    where
        S: Fn(usize) -> BigInt,
    {
        (0..size)
            .map(|n| {
                Ok(self
                    .row(n)?
                    .iter()
                    .enumerate()
                    .map(|(k, t)| {
                        let term = t * s(k);
                        if (n - k) % 2 == 1 {
                            -term
                        } else {
                            term
                        }
                    })
                    .sum())
            })
            .collect()
    }

    /// The first `size` rows, one per line, prefixed with the row number.
    pub fn render(&self, size: usize) -> Result<String> {
        let mut out = String::new();
        for n in 0..size {
            out.push_str(&format!("[{}] {}\n", n, format_row(&self.row(n)?)));
        }
        Ok(out)
    }
}

impl Clone for Triangle {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator(),
            identity: self.identity.clone(),
            invertible: AtomicBool::new(self.is_invertible()),
        }
    }
}

impl fmt::Debug for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangle")
            .field("identity", &self.identity)
            .field("invertible", &self.is_invertible())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Running prefix sums.
pub fn accumulate(values: &[BigInt]) -> Vec<BigInt> {
    values
        .iter()
        .scan(BigInt::zero(), |acc, v| {
            *acc += v;
            Some(acc.clone())
        })
        .collect()
}

/// Format a row as `[a, b, c]`.
pub fn format_row(row: &[BigInt]) -> String {
    let terms: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    format!("[{}]", terms.join(", "))
}

fn reverse_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter()
        .map(|mut row| {
            row.reverse();
            row
        })
        .collect()
}

/// `x^e` for a machine exponent, with `0^0 = 1`.
pub(crate) fn power(x: &BigInt, e: usize) -> BigInt {
    (0..e).fold(BigInt::one(), |acc, _| acc * x)
}
