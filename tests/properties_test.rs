// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over the library triangles.

mod common;

use common::is_round_trip;
use proptest::prelude::*;
use std::sync::Arc;
use tabl::library;
use tabl::triangle::{accumulate, Offset, RowGenerator, Triangle};

/// Library triangles cheap enough to probe at any row below 40.
fn any_triangle() -> impl Strategy<Value = &'static Triangle> {
    let cheap: Vec<&'static Triangle> = library::all()
        .iter()
        .filter(|t| t.name() != "PolyaTreeAcc")
        .collect();
    proptest::sample::select(cheap)
}

proptest! {
    #[test]
    fn test_row_length(t in any_triangle(), n in 0usize..40) {
        prop_assert_eq!(t.row(n).unwrap().len(), n + 1);
    }

    #[test]
    fn test_reverse_idempotent(t in any_triangle(), n in 0usize..40) {
        let mut twice = t.reversed_row(n).unwrap();
        twice.reverse();
        prop_assert_eq!(twice, t.row(n).unwrap());
        prop_assert_eq!(t.reversed().reversed().row(n).unwrap(), t.row(n).unwrap());
    }

    #[test]
    fn test_flatten_is_rows_concatenated(t in any_triangle(), size in 0usize..20) {
        let concatenated: Vec<_> = (0..size).flat_map(|n| t.row(n).unwrap()).collect();
        prop_assert_eq!(t.flatten(size).unwrap(), concatenated);
    }

    #[test]
    fn test_accumulate_undoes_differences(t in any_triangle(), n in 0usize..40) {
        prop_assert_eq!(accumulate(&t.first_differences(n).unwrap()), t.row(n).unwrap());
    }

    #[test]
    fn test_offset_composition(
        t in any_triangle(),
        d in 0usize..5,
        n2 in 0usize..5,
        k2 in 0usize..5,
        n in 0usize..10,
    ) {
        prop_assume!(k2 <= n2);
        let nested = Offset::new(Arc::new(t.offset(d, d)), n2, k2);
        let direct = t.offset(d + n2, d + k2);
        prop_assert_eq!(nested.row(n).unwrap(), direct.row(n).unwrap());
    }

    #[test]
    fn test_inversion_round_trip(t in any_triangle(), k in 1usize..10) {
        let t = t.clone();
        if let Some(inverse) = t.invert(k).unwrap() {
            prop_assert!(is_round_trip(&t.rows(k).unwrap(), &inverse, k));
        }
    }
}
