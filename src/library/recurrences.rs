// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step functions for the library triangles.
//!
//! Each function builds row `n` from the rows before it, following the
//! [`Step`](crate::triangle::Step) contract. Most are row-to-row
//! recurrences. A few read scattered entries of earlier rows, and
//! [`polya_tree_acc`] builds its row from an auxiliary table.

use crate::matrix::Row;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// `C(n, k)`, zero for `k > n`.
pub fn binomial_coefficient(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    (0..k).fold(BigInt::one(), |acc, i| acc * (n - i) / (i + 1))
}

fn one() -> BigInt {
    BigInt::one()
}

fn sign(e: usize) -> BigInt {
    if e % 2 == 0 {
        BigInt::one()
    } else {
        -BigInt::one()
    }
}

/// Pascal's rule.
pub fn binomial(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let last = &previous[n - 1];
    let mut row = vec![one(); n + 1];
    for k in 1..n {
        row[k] = &last[k - 1] + &last[k];
    }
    row
}

/// `(-1)^(n-k) C(n, k)`, via `T(n,k) = T(n-1,k-1) - T(n-1,k)`.
pub fn binomial_inv(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let last = &previous[n - 1];
    let mut row = Vec::with_capacity(n + 1);
    row.push(-&last[0]);
    for k in 1..n {
        row.push(&last[k - 1] - &last[k]);
    }
    row.push(one());
    row
}

/// `T(n,k) = (-1)^k prod_{j<k} (n^2 - j^2)` up to sign: `row[k+1] = row[k] (n^2 - k^2)`.
pub fn central_factorial(n: usize, _previous: &[Row]) -> Row {
    let mut row = vec![one(); n + 1];
    let nn = BigInt::from(n * n);
    for k in 0..n {
        row[k + 1] = &row[k] * (&nn - BigInt::from(k * k));
    }
    row
}

pub fn central_set_inv(n: usize, previous: &[Row]) -> Row {
    match n {
        0 => return vec![one()],
        1 => return vec![BigInt::zero(), one()],
        _ => {}
    }
    let mut row = previous[n - 1].clone();
    row.push(one());
    let m = BigInt::from((n - 1) * (n - 1));
    for k in (1..n).rev() {
        row[k] = &m * &row[k] + &row[k - 1];
    }
    row
}

/// Compositions by longest part (A048004).
///
/// Row `n` is `[c(n-1, k-1) for k in 0..=n]`, and `c(a, b)` is stored at
/// `previous[a + 1][b + 1]`.
pub fn composition_lp(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let c = |a: isize, b: isize| -> BigInt {
        if b < 0 || b > a {
            BigInt::zero()
        } else if b == 0 || b == a {
            one()
        } else {
            previous[(a + 1) as usize][(b + 1) as usize].clone()
        }
    };

    let m = n as isize - 1;
    let mut row = Vec::with_capacity(n + 1);
    row.push(BigInt::zero());
    for j in 0..=m {
        let value = if j == 0 || j == m {
            one()
        } else {
            BigInt::from(2) * c(m - 1, j) + c(m - 1, j - 1) - BigInt::from(2) * c(m - 2, j - 1)
                + c(m - j - 1, j - 1)
                - c(m - j - 2, j)
        };
        row.push(value);
    }
    row
}

pub fn delannoy_inv(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let d = &previous[n - 1];
    let mut row: Row = Vec::with_capacity(n + 1);
    row.push(d.iter().sum());
    row.extend(d.iter().cloned());
    for k in (1..n).rev() {
        row[k] = &row[k + 1] + &d[k - 1] + &d[k];
    }
    row
}

/// Distributive lattices (A050446).
///
/// Row `r` is `[d(r-k, k)]`; `d(a, b)` is stored at `previous[a + b][b]`.
pub fn dist_lattices(r: usize, previous: &[Row]) -> Row {
    let d = |a: usize, b: usize| -> BigInt {
        if a == 0 || b == 0 {
            one()
        } else {
            previous[a + b][b].clone()
        }
    };
    (0..=r)
        .map(|k| {
            let a = r - k;
            if a == 0 || k == 0 {
                return one();
            }
            let sum: BigInt = (0..=(a - 1) / 2)
                .map(|j| d(2 * j, k - 1) * d(a - 1 - 2 * j, k))
                .sum();
            sum + d(a, k - 1)
        })
        .collect()
}

pub fn dyck_paths_inv(n: usize, previous: &[Row]) -> Row {
    match n {
        0 => return vec![one()],
        1 => return vec![one(), one()],
        _ => {}
    }
    let mut p = previous[n - 1].clone();
    p.push(BigInt::zero());
    let mut q = previous[n - 2].clone();
    q.push(BigInt::zero());

    let mut row = p.clone();
    row[n] = one();
    for k in (1..n).rev() {
        row[k] = &p[k - 1] + BigInt::from(2) * &p[k] - &q[k];
    }
    row
}

/// `n! / (n - k)!`.
pub fn falling_factorial(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let last = &previous[n - 1];
    let mut row = Vec::with_capacity(n + 1);
    row.push(one());
    row.extend(last.iter().map(|v| v * n));
    row
}

pub fn lucas_inv(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let mut row = Vec::with_capacity(n + 1);
    row.push(one());
    row.extend(previous[n - 1].iter().cloned());
    for k in 1..n {
        row[k] = &row[k] + BigInt::from(2) * &row[k + 1];
    }
    row
}

pub fn motzkin_inv(n: usize, previous: &[Row]) -> Row {
    match n {
        0 => return vec![one()],
        1 => return vec![-one(), one()],
        _ => {}
    }
    let p = &previous[n - 1];
    let q = &previous[n - 2];
    let at = |row: &Row, k: usize| row.get(k).cloned().unwrap_or_default();

    let mut row = Vec::with_capacity(n + 1);
    for k in 0..n {
        let left = if k == 0 {
            BigInt::zero()
        } else {
            at(p, k - 1)
        };
        row.push(left - at(q, k) - at(p, k));
    }
    row.push(one());
    row
}

pub fn narayana2(n: usize, previous: &[Row]) -> Row {
    match n {
        0 => return vec![one()],
        1 => return vec![BigInt::zero(), one()],
        2 => return vec![BigInt::zero(), one(), one()],
        _ => {}
    }
    let mut a = previous[n - 2].clone();
    a.extend([BigInt::zero(), BigInt::zero()]);
    let mut b = previous[n - 1].clone();
    b.push(one());

    let s = BigInt::from(2 * n - 3);
    let t = BigInt::from(n - 3);
    let n_big = BigInt::from(n);
    for k in (2..n).rev() {
        let numerator =
            (&b[k] + &b[k - 1]) * &s - (&a[k] - BigInt::from(2) * &a[k - 1] + &a[k - 2]) * &t;
        b[k] = numerator.div_floor(&n_big);
    }
    b
}

/// Polya trees by height (A375467).
///
/// Row `n` is `[T(n+1, k+1)]` where `T(i, k)` counts rooted trees with `i`
/// nodes and height at most `k - 1`. The row is built from a fresh table of
/// `T(i, k)` for `i, k <= n + 1`.
pub fn polya_tree_acc(n: usize, _previous: &[Row]) -> Row {
    let size = n + 1;
    // t[k][i]; index 0 of each column is unused.
    let mut t = vec![vec![BigInt::zero(); size + 1]; size + 1];
    for k in 1..=size {
        let h: Vec<BigInt> = (0..=size)
            .map(|m| {
                (1..=m)
                    .filter(|d| m % d == 0)
                    .map(|d| &t[k - 1][d] * d)
                    .sum()
            })
            .collect();
        for i in 1..=size {
            t[k][i] = if i == 1 {
                one()
            } else {
                let sum: BigInt = (1..i).map(|j| &t[k][j] * &h[i - j]).sum();
                sum / (i - 1)
            };
        }
    }
    (0..=n).map(|k| t[k + 1][size].clone()).collect()
}

/// `k^(n-k)`, with `0^0 = 1`.
pub fn powers(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let last = &previous[n - 1];
    let mut row: Row = (0..n).map(|k| &last[k] * k).collect();
    row.push(one());
    row
}

/// `C(n, k) (n - k - 1)` below the diagonal.
pub fn rencontres_inv(n: usize, _previous: &[Row]) -> Row {
    let mut row: Row = (0..n)
        .map(|k| binomial_coefficient(n, k) * (BigInt::from(n) - (k + 1)))
        .collect();
    row.push(one());
    row
}

/// `k! C(n+k-1, k)`.
pub fn rising_factorial(n: usize, _previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let mut row = vec![one(); n + 1];
    row[1] = BigInt::from(n);
    for k in 1..n {
        row[k + 1] = &row[k] * (n + k);
    }
    row
}

pub fn schroeder_inv(n: usize, previous: &[Row]) -> Row {
    match n {
        0 => return vec![one()],
        1 => return vec![BigInt::zero(), one()],
        _ => {}
    }
    let mut a = previous[n - 2].clone();
    a.push(one());
    let mut row = previous[n - 1].clone();
    row.push(one());
    for k in (1..n).rev() {
        row[k] = &row[k] + &row[k - 1] + &a[k - 1];
    }
    row
}

/// `(-1)^(n-k) C(n, k) k^n`.
pub fn sidi(n: usize, _previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    (0..=n)
        .map(|k| sign(n - k) * binomial_coefficient(n, k) * BigInt::from(k).pow(n as u32))
        .collect()
}

pub fn stirling_cycle_b(n: usize, previous: &[Row]) -> Row {
    if n == 0 {
        return vec![one()];
    }
    let mut row = previous[n - 1].clone();
    row.push(one());
    let m = BigInt::from(2 * n - 1);
    for k in (1..n).rev() {
        row[k] = &m * &row[k] + &row[k - 1];
    }
    row[0] *= &m;
    row
}
