// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The trait catalog.
//!
//! A trait is a named integer sequence derived from a triangle: a row sum,
//! a diagonal, a transform, the flattened inverse. The catalog is closed:
//! [`TraitId`] enumerates every trait, and [`TraitId::info`] maps each one
//! to its function, default size and TeX formula. Iteration order is the
//! catalog order, starting with [`TraitId::Triangle`].
//!
//! Most traits that change the shape of the triangle come twice: once for
//! the triangle as given and once, with a `Rev` prefix, for the triangle
//! with reversed rows.

pub mod functions;

pub use functions::{poly_col, poly_row, table_column, table_diagonal};

use crate::triangle::{Result, Triangle, TriangleError};
use num_bigint::BigInt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// A function computing a trait for the given number of rows or terms.
pub type TraitFn = fn(&Triangle, usize) -> Result<Vec<BigInt>>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCountMacro,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum TraitId {
    Triangle,
    Tinv,
    Trev,
    Tinvrev,
    Toff11,
    Trev11,
    Tinv11,
    Tinvrev11,
    Tantidiag,
    Tacc,
    Talt,
    Tder,
    TablCol0,
    TablCol1,
    TablCol2,
    TablCol3,
    TablDiag0,
    TablDiag1,
    TablDiag2,
    TablDiag3,
    TablLcm,
    TablGcd,
    TablMax,
    TablSum,
    EvenSum,
    OddSum,
    AltSum,
    AbsSum,
    AccSum,
    AccRevSum,
    AntiDSum,
    ColMiddle,
    CentralE,
    CentralO,
    PosHalf,
    NegHalf,
    TransNat0,
    TransNat1,
    TransSqrs,
    BinConv,
    InvBinConv,
    PolyRow1,
    PolyRow2,
    PolyRow3,
    PolyCol2,
    PolyCol3,
    PolyDiag,
    RevToff11,
    RevTrev11,
    RevTinv11,
    RevTantidiag,
    RevTacc,
    RevTalt,
    RevTder,
    RevEvenSum,
    RevOddSum,
    RevAccRevSum,
    RevAntiDSum,
    RevColMiddle,
    RevCentralO,
    RevPosHalf,
    RevNegHalf,
    RevTransNat0,
    RevTransNat1,
    RevTransSqrs,
    RevPolyRow1,
    RevPolyRow2,
    RevPolyRow3,
    RevPolyCol3,
    RevPolyDiag,
}

/// Catalog entry for one trait.
#[derive(Debug, Clone, Copy)]
pub struct TraitInfo {
    pub id: TraitId,
    pub function: TraitFn,
    /// Default number of rows (7 or 9) or terms (28).
    pub size: usize,
    /// TeX rendering of the trait.
    pub formula: &'static str,
}

const ROWS: usize = 7;
const ANTIDIAGONAL_ROWS: usize = 9;
const TERMS: usize = 28;

impl TraitId {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a trait name, e.g. `"TablSum"`.
    pub fn parse(name: &str) -> Result<TraitId> {
        TraitId::from_str(name.trim()).map_err(|_| TriangleError::UnknownTrait(name.to_string()))
    }

    /// True for the traits read from the row-reversed triangle.
    pub fn is_reversed(self) -> bool {
        self.name().starts_with("Rev")
    }

    pub fn info(self) -> TraitInfo {
        use functions::*;
        use TraitId::*;
        let (function, size, formula): (TraitFn, usize, &'static str) = match self {
            TraitId::Triangle => (triangle, ROWS, r"\(T_{n,k}\)"),
            Tinv => (tinv, ROWS, r"\(T^{-1}_{n,k}\)"),
            Trev => (trev, ROWS, r"\(T_{n,n-k}\)"),
            Tinvrev => (tinvrev, ROWS, r"\((T_{n,n-k})^{-1}\)"),
            Toff11 => (toff11, ROWS, r"\(T_{n+1,k+1} \)"),
            Trev11 => (trev11, ROWS, r"\(T_{n+1,n-k+1} \)"),
            Tinv11 => (tinv11, ROWS, r"\(T^{-1}_{n+1,k+1}\)"),
            Tinvrev11 => (tinvrev11, ROWS, r"\((T_{n+1,n-k+1})^{-1}\)"),
            Tantidiag => (tantidiag, ANTIDIAGONAL_ROWS, r"\(T_{n-k,k}\ \ (k \le n/2)\)"),
            Tacc => (tacc, ROWS, r"\(\sum_{j=0}^{k} T_{n,j}\)"),
            Talt => (talt, ROWS, r"\(T_{n,k}\ (-1)^{k}\)"),
            Tder => (tder, ROWS, r"\(T_{n+1,k+1}\ (k+1) \)"),
            TablCol0 => (tabl_col0, TERMS, r"\(T_{n  ,0}\)"),
            TablCol1 => (tabl_col1, TERMS, r"\(T_{n+1,1}\)"),
            TablCol2 => (tabl_col2, TERMS, r"\(T_{n+2,2}\)"),
            TablCol3 => (tabl_col3, TERMS, r"\(T_{n+3,3}\)"),
            TablDiag0 => (tabl_diag0, TERMS, r"\(T_{n  ,n}\)"),
            TablDiag1 => (tabl_diag1, TERMS, r"\(T_{n+1,n}\)"),
            TablDiag2 => (tabl_diag2, TERMS, r"\(T_{n+2,n}\)"),
            TablDiag3 => (tabl_diag3, TERMS, r"\(T_{n+3,n}\)"),
            TablLcm => (
                tabl_lcm,
                TERMS,
                r"\(\text{lcm}_{k=0}^{n}\ |T_{n,k}|\ (T_{n,k}>1)\)",
            ),
            TablGcd => (
                tabl_gcd,
                TERMS,
                r"\(\text{gcd}_{k=0}^{n}\ |T_{n,k}|\ (T_{n,k}>1)\)",
            ),
            TablMax => (tabl_max, TERMS, r"\(\text{max}_{k=0}^{n}\ |T_{n,k}|\)"),
            TablSum => (tabl_sum, TERMS, r"\(\sum_{k=0}^{n} T_{n,k}\)"),
            EvenSum => (even_sum, TERMS, r"\(\sum_{k=0}^{n} T_{n,k}\ [2|k]\)"),
            OddSum => (odd_sum, TERMS, r"\(\sum_{k=0}^{n} T_{n,k}\ (1-[2|k])\)"),
            AltSum => (alt_sum, TERMS, r"\(\sum_{k=0}^{n} T_{n,k}\ (-1)^{k}\)"),
            AbsSum => (abs_sum, TERMS, r"\(\sum_{k=0}^{n} | T_{n,k} |\)"),
            AccSum => (acc_sum, TERMS, r"\(\sum_{k=0}^{n} \sum_{j=0}^{k} T_{n,j}\)"),
            AccRevSum => (
                acc_rev_sum,
                TERMS,
                r"\(\sum_{k=0}^{n} \sum_{j=0}^{k} T_{n,n-j}\)",
            ),
            AntiDSum => (anti_d_sum, TERMS, r"\(\sum_{k=0}^{n/2} T_{n-k, k}\)"),
            ColMiddle => (col_middle, TERMS, r"\(T_{n, n / 2}\)"),
            CentralE => (central_e, TERMS, r"\(T_{2 n, n}\)"),
            CentralO => (central_o, TERMS, r"\(T_{2 n + 1, n}\)"),
            PosHalf => (pos_half, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ 2^{n-k} \)"),
            NegHalf => (neg_half, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ (-2)^{n-k} \)"),
            TransNat0 => (trans_nat0, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ k\)"),
            TransNat1 => (trans_nat1, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ (k+1)\)"),
            TransSqrs => (trans_sqrs, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ k^{2}\)"),
            BinConv => (bin_conv, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ \binom{n}{k} \)"),
            InvBinConv => (
                inv_bin_conv,
                TERMS,
                r"\(\sum_{k=0}^{n}T_{n,k}\ (-1)^{n-k}\ \binom{n}{k}\)",
            ),
            PolyRow1 => (poly_row1, TERMS, r"\(\sum_{k=0}^{1}T_{1,k}\ n^k\)"),
            PolyRow2 => (poly_row2, TERMS, r"\(\sum_{k=0}^{2}T_{2,k}\ n^k\)"),
            PolyRow3 => (poly_row3, TERMS, r"\(\sum_{k=0}^{3}T_{3,k}\ n^k\)"),
            PolyCol2 => (poly_col2, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ 2^k\)"),
            PolyCol3 => (poly_col3, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ 3^k\)"),
            PolyDiag => (poly_diag, TERMS, r"\(\sum_{k=0}^{n}T_{n,k}\ n^k\)"),
            RevToff11 => (rev_toff11, ROWS, r"\(T_{n+1,n-k} \)"),
            RevTrev11 => (rev_trev11, ROWS, r"\(T_{n+1,n-k} \)"),
            RevTinv11 => (rev_tinv11, ROWS, r"\(T^{-1}_{n+1,n-k}\)"),
            RevTantidiag => (
                rev_tantidiag,
                ANTIDIAGONAL_ROWS,
                r"\(T_{n-k,n-2k}\ \ (k \le n/2)\)",
            ),
            RevTacc => (rev_tacc, ROWS, r"\(\sum_{j=0}^{n-k}T_{n,n-j}\)"),
            RevTalt => (rev_talt, ROWS, r"\(T_{n,n-k}\ (-1)^{n-k}\)"),
            RevTder => (rev_tder, ROWS, r"\(T_{n+1,n-k}\ (n-k+1) \)"),
            RevEvenSum => (rev_even_sum, TERMS, r"\(\sum_{k=0}^{n}T_{n,n-k}\ [2|k]\)"),
            RevOddSum => (
                rev_odd_sum,
                TERMS,
                r"\(\sum_{k=0}^{n}T_{n,n-k}\ (1-[2|k])\)",
            ),
            RevAccRevSum => (
                rev_acc_rev_sum,
                TERMS,
                r"\(\sum_{k=0}^{n} \sum_{j=0}^{k}T_{n,n-j}\)",
            ),
            RevAntiDSum => (rev_anti_d_sum, TERMS, r"\(\sum_{k=0}^{n/2}T_{n-k,n-k}\)"),
            RevColMiddle => (rev_col_middle, TERMS, r"\(T_{n,n/2}\)"),
            RevCentralO => (rev_central_o, TERMS, r"\(T_{2n+1,n}\)"),
            RevPosHalf => (
                rev_pos_half,
                TERMS,
                r"\(\sum_{k=0}^{n}T_{n,n-k}\ 2^{n-k} \)",
            ),
            RevNegHalf => (
                rev_neg_half,
                TERMS,
                r"\(\sum_{k=0}^{n}T_{n,n-k}\ (-2)^{n-k} \)",
            ),
            RevTransNat0 => (rev_trans_nat0, TERMS, r"\(\sum_{k=0}^{n}T_{n,n-k}\ k\)"),
            RevTransNat1 => (
                rev_trans_nat1,
                TERMS,
                r"\(\sum_{k=0}^{n}T_{n,n-k}\ (k + 1)\)",
            ),
            RevTransSqrs => (rev_trans_sqrs, TERMS, r"\(\sum_{k=0}^{n}T_{n,n-k}\ k^{2}\)"),
            RevPolyRow1 => (rev_poly_row1, TERMS, r"\(\sum_{k=0}^{1}T_{1,n-k}\ n^k\)"),
            RevPolyRow2 => (rev_poly_row2, TERMS, r"\(\sum_{k=0}^{2}T_{2,n-k}\ n^k\)"),
            RevPolyRow3 => (rev_poly_row3, TERMS, r"\(\sum_{k=0}^{3}T_{3,n-k}\ n^k\)"),
            RevPolyCol3 => (rev_poly_col3, TERMS, r"\(\sum_{k=0}^{n}T_{n,n-k}\ 3^k\)"),
            RevPolyDiag => (rev_poly_diag, TERMS, r"\(\sum_{k=0}^{n}T_{n,n-k}\ n^k\)"),
        };
        TraitInfo {
            id: self,
            function,
            size,
            formula,
        }
    }

    /// Run the trait at its default size.
    pub fn evaluate(self, t: &Triangle) -> Result<Vec<BigInt>> {
        self.evaluate_with(t, self.info().size)
    }

    pub fn evaluate_with(self, t: &Triangle, size: usize) -> Result<Vec<BigInt>> {
        (self.info().function)(t, size)
    }
}

/// Every trait, in catalog order.
pub fn all_traits() -> impl Iterator<Item = TraitInfo> {
    TraitId::iter().map(TraitId::info)
}
