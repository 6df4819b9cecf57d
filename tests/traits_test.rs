// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trait catalog checked against well-known sequences of the binomial triangle.

mod common;

use common::{ints, pascal};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use tabl::library;
use tabl::traits::{all_traits, TraitId};

fn first(id: TraitId, size: usize) -> Vec<BigInt> {
    id.evaluate_with(library::binomial(), size).unwrap()
}

#[test]
fn test_binomial_row_sums() {
    assert_eq!(first(TraitId::TablSum, 6), ints(&[1, 2, 4, 8, 16, 32]));
    assert_eq!(first(TraitId::AltSum, 4), ints(&[1, 0, 0, 0]));
    assert_eq!(first(TraitId::EvenSum, 5), ints(&[1, 1, 2, 4, 8]));
    assert_eq!(first(TraitId::PosHalf, 5), ints(&[1, 3, 9, 27, 81]));
    assert_eq!(first(TraitId::BinConv, 5), ints(&[1, 2, 6, 20, 70]));
    assert_eq!(first(TraitId::CentralE, 5), ints(&[1, 2, 6, 20, 70]));
}

#[test]
fn test_binomial_columns_and_diagonals() {
    assert_eq!(first(TraitId::TablCol0, 4), ints(&[1, 1, 1, 1]));
    assert_eq!(first(TraitId::TablCol1, 4), ints(&[1, 2, 3, 4]));
    assert_eq!(first(TraitId::TablDiag1, 4), ints(&[1, 2, 3, 4]));
    assert_eq!(first(TraitId::TablCol2, 4), ints(&[1, 3, 6, 10]));
}

#[test]
fn test_binomial_shapes() {
    assert_eq!(first(TraitId::Triangle, 3), ints(&[1, 1, 1, 1, 2, 1]));
    assert_eq!(first(TraitId::Tinv, 3), ints(&[1, -1, 1, 1, -2, 1]));
    assert_eq!(first(TraitId::Talt, 3), ints(&[1, 1, -1, 1, -2, 1]));
    assert_eq!(first(TraitId::Tacc, 3), ints(&[1, 1, 2, 1, 3, 4]));
}

#[test]
fn test_symmetric_triangle_has_equal_reversed_traits() {
    // The binomial triangle is symmetric, so reading it backwards changes nothing.
    let t = pascal();
    for (forward, reversed) in [
        (TraitId::EvenSum, TraitId::RevEvenSum),
        (TraitId::Tacc, TraitId::RevTacc),
        (TraitId::PosHalf, TraitId::RevPosHalf),
        (TraitId::PolyRow2, TraitId::RevPolyRow2),
    ] {
        assert_eq!(
            forward.evaluate(&t).unwrap(),
            reversed.evaluate(&t).unwrap(),
            "{} vs {}",
            forward,
            reversed
        );
    }
}

#[test]
fn test_every_trait_runs_on_every_library_triangle() {
    for t in library::all() {
        if t.name() == "PolyaTreeAcc" {
            continue;
        }
        for info in all_traits() {
            let seq = info.id.evaluate(t).unwrap();
            if !matches!(
                info.id,
                TraitId::Tinv
                    | TraitId::Tinvrev
                    | TraitId::Tinv11
                    | TraitId::Tinvrev11
                    | TraitId::RevTinv11
            ) {
                assert!(!seq.is_empty(), "{}_{}", t.name(), info.id);
            }
        }
    }
}

#[test]
fn test_parse_trait_names() {
    assert_eq!(TraitId::parse("RevPolyDiag").unwrap(), TraitId::RevPolyDiag);
    assert!(TraitId::parse("revpolydiag").is_err());
}
