// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The trait functions themselves.
//!
//! Each function has the shape of [`TraitFn`](super::TraitFn): it reads a
//! triangle for `size` rows or terms and returns a flat sequence. Traits
//! that need an inverse return an empty sequence when there is none.

use crate::library;
use crate::matrix::Row;
use crate::triangle::{accumulate, Result, Triangle};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Concatenate `f(0), ..., f(size - 1)`.
fn flat_rows<F>(size: usize, f: F) -> Result<Vec<BigInt>>
where
    F: Fn(usize) -> Result<Row>,
{
    let mut out = Vec::new();
    for n in 0..size {
        out.extend(f(n)?);
    }
    Ok(out)
}

/// `[f(row(n), n) for n in 0..size]`.
fn per_row<F>(t: &Triangle, size: usize, f: F) -> Result<Vec<BigInt>>
where
    F: Fn(&[BigInt], usize) -> BigInt,
{
    (0..size).map(|n| Ok(f(&t.row(n)?, n))).collect()
}

fn flatten_inverse(inverse: Option<Vec<Row>>) -> Vec<BigInt> {
    inverse.into_iter().flatten().flatten().collect()
}

fn dot(a: &[BigInt], b: &[BigInt]) -> BigInt {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

// Shapes

pub fn triangle(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    t.flatten(size)
}

pub fn tinv(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    Ok(flatten_inverse(t.invert(size)?))
}

pub fn trev(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.reversed_row(n))
}

/// Inverse of the row-reversed triangle.
pub fn tinvrev(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    Ok(flatten_inverse(t.invert_reversed_rows(size)?))
}

pub fn toff11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.row_11(n))
}

pub fn trev11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.reversed_row_11(n))
}

pub fn tinv11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    Ok(flatten_inverse(t.invert_11(size)?))
}

pub fn tinvrev11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    Ok(flatten_inverse(t.invert_reversed_rows_11(size)?))
}

pub fn tantidiag(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.antidiagonal(n))
}

pub fn tacc(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.accumulated_row(n))
}

pub fn talt(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.alternating_row(n))
}

/// The derivative triangle `T(n+1, k+1) (k+1)`.
pub fn tder(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    flat_rows(size, |n| t.derivative(n + 1))
}

// Columns and diagonals

/// `[T(col + n, col) for n in 0..size]`.
pub fn table_column(t: &Triangle, col: usize, size: usize) -> Result<Vec<BigInt>> {
    t.column(col, size)
}

/// `[T(diag + k, k) for k in 0..size]`.
pub fn table_diagonal(t: &Triangle, diag: usize, size: usize) -> Result<Vec<BigInt>> {
    t.diagonal(diag, size)
}

pub fn tabl_col0(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_column(t, 0, size)
}

pub fn tabl_col1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_column(t, 1, size)
}

pub fn tabl_col2(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_column(t, 2, size)
}

pub fn tabl_col3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_column(t, 3, size)
}

pub fn tabl_diag0(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_diagonal(t, 0, size)
}

pub fn tabl_diag1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_diagonal(t, 1, size)
}

pub fn tabl_diag2(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_diagonal(t, 2, size)
}

pub fn tabl_diag3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    table_diagonal(t, 3, size)
}

// Row statistics

/// Lcm or gcd of the absolute row entries outside `{-1, 0, 1}`; 1 if there are none.
fn row_lcm_gcd(row: &[BigInt], lcm: bool) -> BigInt {
    let mut entries = row.iter().map(|v| v.abs()).filter(|v| *v > BigInt::one());
    let first = match entries.next() {
        Some(first) => first,
        None => return BigInt::one(),
    };
    entries.fold(first, |acc, v| if lcm { acc.lcm(&v) } else { acc.gcd(&v) })
}

pub fn tabl_lcm(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| row_lcm_gcd(row, true))
}

pub fn tabl_gcd(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| row_lcm_gcd(row, false))
}

pub fn tabl_max(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| {
        row.iter().map(|v| v.abs()).max().unwrap_or_default()
    })
}

pub fn tabl_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| row.iter().sum())
}

fn even_part(row: &[BigInt]) -> BigInt {
    row.iter().step_by(2).sum()
}

fn odd_part(row: &[BigInt]) -> BigInt {
    row.iter().skip(1).step_by(2).sum()
}

pub fn even_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| even_part(row))
}

pub fn odd_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| odd_part(row))
}

pub fn alt_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| even_part(row) - odd_part(row))
}

pub fn abs_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| row.iter().map(|v| v.abs()).sum())
}

pub fn acc_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| accumulate(row).iter().sum())
}

pub fn acc_rev_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    per_row(t, size, |row, _| {
        let reversed: Vec<BigInt> = row.iter().rev().cloned().collect();
        accumulate(&reversed).iter().sum()
    })
}

pub fn anti_d_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    (0..size)
        .map(|n| Ok(t.antidiagonal(n)?.iter().sum()))
        .collect()
}

// Central terms

pub fn col_middle(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|n| t.value(n, n / 2)).collect()
}

pub fn central_e(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|n| t.value(2 * n, n)).collect()
}

pub fn central_o(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|n| t.value(2 * n + 1, n)).collect()
}

// Sums weighted by powers of the row position

/// `sum T(n,k) x^(n-k)`: the row read with descending powers.
pub fn poly_frac(row: &[BigInt], x: &BigInt) -> BigInt {
    row.iter().fold(BigInt::zero(), |acc, c| acc * x + c)
}

pub fn pos_half(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    let two = BigInt::from(2);
    per_row(t, size, |row, _| poly_frac(row, &two))
}

pub fn neg_half(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    let minus_two = BigInt::from(-2);
    per_row(t, size, |row, _| poly_frac(row, &minus_two))
}

// Transforms

pub fn trans_nat0(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    t.linear_transform(|k| BigInt::from(k), size)
}

pub fn trans_nat1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    t.linear_transform(|k| BigInt::from(k + 1), size)
}

pub fn trans_sqrs(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    t.linear_transform(|k| BigInt::from(k * k), size)
}

pub fn bin_conv(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    let binomial = library::binomial();
    (0..size)
        .map(|n| Ok(dot(&binomial.row(n)?, &t.row(n)?)))
        .collect()
}

pub fn inv_bin_conv(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    let binomial_inv = library::binomial_inv();
    (0..size)
        .map(|n| Ok(dot(&binomial_inv.row(n)?, &t.row(n)?)))
        .collect()
}

// Polynomials

/// `[P(row, x) for x in 0..size]`, with `P(n, x) = sum T(n,k) x^k`.
pub fn poly_row(t: &Triangle, row: usize, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|x| t.evaluate_polynomial(row, x)).collect()
}

/// `[P(n, col) for n in 0..size]`.
pub fn poly_col(t: &Triangle, col: usize, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|n| t.evaluate_polynomial(n, col)).collect()
}

pub fn poly_row1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row(t, 1, size)
}

pub fn poly_row2(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row(t, 2, size)
}

pub fn poly_row3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row(t, 3, size)
}

pub fn poly_col2(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_col(t, 2, size)
}

pub fn poly_col3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_col(t, 3, size)
}

/// `[P(n, n) for n in 0..size]`.
pub fn poly_diag(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    (0..size).map(|n| t.evaluate_polynomial(n, n)).collect()
}

// The same traits read from the row-reversed triangle

pub fn rev_toff11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    toff11(&t.reversed(), size)
}

pub fn rev_trev11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    trev11(&t.reversed(), size)
}

pub fn rev_tinv11(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    tinv11(&t.reversed(), size)
}

pub fn rev_tantidiag(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    tantidiag(&t.reversed(), size)
}

pub fn rev_tacc(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    tacc(&t.reversed(), size)
}

pub fn rev_talt(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    talt(&t.reversed(), size)
}

pub fn rev_tder(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    tder(&t.reversed(), size)
}

pub fn rev_even_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    even_sum(&t.reversed(), size)
}

pub fn rev_odd_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    odd_sum(&t.reversed(), size)
}

pub fn rev_acc_rev_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    acc_rev_sum(&t.reversed(), size)
}

pub fn rev_anti_d_sum(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    anti_d_sum(&t.reversed(), size)
}

pub fn rev_col_middle(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    col_middle(&t.reversed(), size)
}

pub fn rev_central_o(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    central_o(&t.reversed(), size)
}

pub fn rev_pos_half(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    pos_half(&t.reversed(), size)
}

pub fn rev_neg_half(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    neg_half(&t.reversed(), size)
}

pub fn rev_trans_nat0(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    trans_nat0(&t.reversed(), size)
}

pub fn rev_trans_nat1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    trans_nat1(&t.reversed(), size)
}

pub fn rev_trans_sqrs(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    trans_sqrs(&t.reversed(), size)
}

pub fn rev_poly_row1(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row1(&t.reversed(), size)
}

pub fn rev_poly_row2(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row2(&t.reversed(), size)
}

pub fn rev_poly_row3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_row3(&t.reversed(), size)
}

pub fn rev_poly_col3(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_col3(&t.reversed(), size)
}

pub fn rev_poly_diag(t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
    poly_diag(&t.reversed(), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::from_i64;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_row_lcm_gcd() {
        assert_eq!(row_lcm_gcd(&ints(&[1, 4, 6, 4, 1]), true), BigInt::from(12));
        assert_eq!(row_lcm_gcd(&ints(&[1, 4, 6, 4, 1]), false), BigInt::from(2));
        assert_eq!(row_lcm_gcd(&ints(&[-6, 0, 1, -1]), true), BigInt::from(6));
        assert_eq!(row_lcm_gcd(&ints(&[1, 0, -1]), true), BigInt::one());
        assert_eq!(row_lcm_gcd(&ints(&[1, 0, -1]), false), BigInt::one());
    }

    #[test]
    fn test_poly_frac() {
        // 1 * 2^2 + 2 * 2 + 3
        assert_eq!(poly_frac(&ints(&[1, 2, 3]), &BigInt::from(2)), BigInt::from(11));
        assert_eq!(poly_frac(&ints(&[5]), &BigInt::from(-2)), BigInt::from(5));
    }

    #[test]
    fn test_dot_and_flatten_inverse() {
        assert_eq!(dot(&ints(&[1, 2, 3]), &ints(&[4, 5, 6])), BigInt::from(32));
        assert!(flatten_inverse(None).is_empty());
        assert_eq!(
            flatten_inverse(Some(from_i64(&[&[1], &[-1, 1]]))),
            ints(&[1, -1, 1])
        );
    }
}
