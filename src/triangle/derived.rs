// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generators derived from another generator.
//!
//! Each wrapper holds a shared reference to its base and transforms rows on
//! the way out. None of them memoizes: the base is expected to.

use super::errors::Result;
use super::generator::RowGenerator;
use crate::matrix::Row;
use std::sync::Arc;

/// Rows of the base, reversed: `T(n, n - k)`.
pub struct Reversed {
    base: Arc<dyn RowGenerator>,
}

impl Reversed {
    pub fn new(base: Arc<dyn RowGenerator>) -> Self {
        Self { base }
    }
}

impl RowGenerator for Reversed {
    fn row(&self, n: usize) -> Result<Row> {
        let mut row = self.base.row(n)?;
        row.reverse();
        Ok(row)
    }
}

/// Rows of the base with alternating signs: `(-1)^k T(n, k)`.
pub struct Alternating {
    base: Arc<dyn RowGenerator>,
}

impl Alternating {
    pub fn new(base: Arc<dyn RowGenerator>) -> Self {
        Self { base }
    }
}

impl RowGenerator for Alternating {
    fn row(&self, n: usize) -> Result<Row> {
        Ok(alternate(self.base.row(n)?))
    }
}

/// Negate the entries at odd positions.
pub(crate) fn alternate(row: Row) -> Row {
    row.into_iter()
        .enumerate()
        .map(|(k, v)| if k % 2 == 1 { -v } else { v })
        .collect()
}

/// The part of the base below and right of the root `(rows, cols)`.
///
/// Row `n` is `base(n + rows)[cols .. rows + n + 1]`, which has
/// `n + 1 + rows - cols` entries. Only a root on the main diagonal
/// (`rows == cols`) yields a triangle in the strict sense.
pub struct Offset {
    base: Arc<dyn RowGenerator>,
    rows: usize,
    cols: usize,
}

impl Offset {
    /// # Panics
    ///
    /// Panics if `cols > rows`: such a root lies above the main diagonal.
    pub fn new(base: Arc<dyn RowGenerator>, rows: usize, cols: usize) -> Self {
        assert!(
            cols <= rows,
            "offset root ({}, {}) lies above the main diagonal",
            rows,
            cols
        );
        Self { base, rows, cols }
    }

    pub fn root(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl RowGenerator for Offset {
    fn row(&self, n: usize) -> Result<Row> {
        let full = self.base.row(n + self.rows)?;
        let end = self.rows + n + 1;
        assert!(
            full.len() >= end,
            "row {} has {} entries, expected {}",
            n + self.rows,
            full.len(),
            end
        );
        Ok(full[self.cols..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::from_i64;
    use crate::triangle::FnGenerator;
    use num_bigint::BigInt;

    /// T(n, k) = 10 n + k, easy to read back.
    fn labelled() -> Arc<dyn RowGenerator> {
        Arc::new(FnGenerator(|n: usize| -> Row {
            (0..=n).map(|k| BigInt::from(10 * n + k)).collect()
        }))
    }

    #[test]
    fn test_reversed() {
        let rev = Reversed::new(labelled());
        assert_eq!(rev.row(2).unwrap(), from_i64(&[&[22, 21, 20]])[0]);
    }

    #[test]
    fn test_alternating() {
        let alt = Alternating::new(labelled());
        assert_eq!(alt.row(3).unwrap(), from_i64(&[&[30, -31, 32, -33]])[0]);
    }

    #[test]
    fn test_offset_on_diagonal() {
        let off = Offset::new(labelled(), 1, 1);
        assert_eq!(off.row(0).unwrap(), from_i64(&[&[11]])[0]);
        assert_eq!(off.row(2).unwrap(), from_i64(&[&[31, 32, 33]])[0]);
    }

    #[test]
    fn test_offset_below_diagonal() {
        let off = Offset::new(labelled(), 2, 1);
        assert_eq!(off.root(), (2, 1));
        // base(2)[1..3]
        assert_eq!(off.row(0).unwrap(), from_i64(&[&[21, 22]])[0]);
        assert_eq!(off.row(1).unwrap(), from_i64(&[&[31, 32, 33]])[0]);
    }

    #[test]
    #[should_panic(expected = "above the main diagonal")]
    fn test_offset_above_diagonal() {
        Offset::new(labelled(), 0, 1);
    }
}
