// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row generators.
//!
//! A row generator maps a row index `n` to the `n + 1` exact integers of
//! that row. [`Recurrence`] is the memoizing implementation used by the
//! library: row `n` is computed from the rows before it, which are kept in
//! a memo table for the lifetime of the generator.

use super::errors::{Result, TriangleError};
use crate::matrix::Row;
use parking_lot::RwLock;
use tracing::debug;

/// A function from row index to row.
///
/// Implementations must be deterministic and return exactly `n + 1`
/// entries for row `n`; [`Triangle`](super::Triangle) checks the length
/// and panics on a mismatch. A generator may refuse expensive rows with
/// [`TriangleError::TooLarge`].
pub trait RowGenerator: Send + Sync {
    fn row(&self, n: usize) -> Result<Row>;
}

/// Step function of a recurrence: builds row `n` from rows `0..n`.
pub type Step = fn(n: usize, previous: &[Row]) -> Row;

/// A memoized row-by-row recurrence.
///
/// The memo is filled in order, so when `step(n, previous)` runs,
/// `previous` holds exactly rows `0..n`.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use tabl::triangle::{Recurrence, RowGenerator};
///
/// // Pascal's rule.
/// let binomial = Recurrence::new("Binomial", |n, previous| {
///     if n == 0 {
///         return vec![BigInt::from(1)];
///     }
///     let last = &previous[n - 1];
///     let mut row = vec![BigInt::from(1); n + 1];
///     for k in 1..n {
///         row[k] = &last[k - 1] + &last[k];
///     }
///     row
/// });
/// assert_eq!(binomial.row(4).unwrap()[2], BigInt::from(6));
/// ```
pub struct Recurrence {
    name: String,
    step: Step,
    row_limit: Option<usize>,
    memo: RwLock<Vec<Row>>,
}

impl Recurrence {
    pub fn new(name: impl Into<String>, step: Step) -> Self {
        Self {
            name: name.into(),
            step,
            row_limit: None,
            memo: RwLock::new(Vec::new()),
        }
    }

    /// Refuse rows beyond `limit` instead of computing them.
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = Some(limit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows currently held in the memo.
    pub fn memoized_rows(&self) -> usize {
        self.memo.read().len()
    }
}

impl RowGenerator for Recurrence {
    fn row(&self, n: usize) -> Result<Row> {
        if let Some(limit) = self.row_limit {
            if n > limit {
                return Err(TriangleError::TooLarge {
                    name: self.name.clone(),
                    row: n,
                    limit,
                });
            }
        }

        if let Some(row) = self.memo.read().get(n) {
            return Ok(row.clone());
        }

        let mut memo = self.memo.write();
        if memo.len() <= n {
            debug!(
                "[{}] extending memo from {} to {} rows",
                self.name,
                memo.len(),
                n + 1
            );
        }
        while memo.len() <= n {
            let next = (self.step)(memo.len(), &memo);
            memo.push(next);
        }
        Ok(memo[n].clone())
    }
}

impl std::fmt::Debug for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recurrence")
            .field("name", &self.name)
            .field("row_limit", &self.row_limit)
            .field("memoized_rows", &self.memoized_rows())
            .finish()
    }
}

/// An unmemoized generator backed by a closure.
pub struct FnGenerator<F>(pub F);

impl<F> RowGenerator for FnGenerator<F>
where
    F: Fn(usize) -> Row + Send + Sync,
{
    fn row(&self, n: usize) -> Result<Row> {
        Ok((self.0)(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static STEPS: AtomicUsize = AtomicUsize::new(0);

    fn counted_powers_of_two(n: usize, previous: &[Row]) -> Row {
        STEPS.fetch_add(1, Ordering::SeqCst);
        powers_of_two(n, previous)
    }

    fn powers_of_two(n: usize, previous: &[Row]) -> Row {
        match n {
            0 => vec![BigInt::from(1)],
            _ => {
                let mut row: Row = previous[n - 1].iter().map(|v| v * 2).collect();
                row.push(BigInt::from(1));
                row
            }
        }
    }

    #[test]
    fn test_recurrence_memoizes() {
        let rec = Recurrence::new("Counted", counted_powers_of_two);
        assert_eq!(rec.memoized_rows(), 0);

        let row = rec.row(3).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], BigInt::from(8));
        assert_eq!(rec.memoized_rows(), 4);

        let before = STEPS.load(Ordering::SeqCst);
        rec.row(2).unwrap();
        rec.row(3).unwrap();
        assert_eq!(STEPS.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_row_limit() {
        let rec = Recurrence::new("Limited", powers_of_two).with_row_limit(2);
        assert!(rec.row(2).is_ok());
        assert_eq!(
            rec.row(3),
            Err(TriangleError::TooLarge {
                name: "Limited".to_string(),
                row: 3,
                limit: 2
            })
        );
        // The refusal does not grow the memo.
        assert_eq!(rec.memoized_rows(), 3);
    }

    #[test]
    fn test_fn_generator() {
        let gen = FnGenerator(|n: usize| vec![BigInt::from(n); n + 1]);
        assert_eq!(gen.row(2).unwrap(), vec![BigInt::from(2); 3]);
    }

    #[test]
    fn test_concurrent_access() {
        let rec = std::sync::Arc::new(Recurrence::new("Shared", powers_of_two));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let rec = rec.clone();
                std::thread::spawn(move || rec.row(10 + i).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap().len(), 11 + i);
        }
    }
}
