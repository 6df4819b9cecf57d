// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A library of named integer triangles.
//!
//! Every entry is a memoized [`Recurrence`] paired with its OEIS identity.
//! The library is built once, on first use, and lives for the rest of the
//! process; look triangles up with [`get`] or walk them with [`all`].

pub mod recurrences;

use crate::triangle::{Identity, Recurrence, Result, Step, Triangle, TriangleError};
use std::sync::OnceLock;

/// Rows above this are refused by `PolyaTreeAcc`, whose rows are built from scratch.
pub const POLYA_TREE_ROW_LIMIT: usize = 200;

struct Entry {
    name: &'static str,
    step: Step,
    similars: &'static [&'static str],
    inverse_id: &'static str,
    formula: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "Binomial",
        step: recurrences::binomial,
        similars: &["A007318"],
        inverse_id: "A130595",
        formula: r"\binom{n}{k}",
    },
    Entry {
        name: "BinomialInv",
        step: recurrences::binomial_inv,
        similars: &["A130595"],
        inverse_id: "A007318",
        formula: r"(-1)^{n-k} \, n! \, / (k! \, (n - k)! )",
    },
    Entry {
        name: "CentralFactorial",
        step: recurrences::central_factorial,
        similars: &["A370707"],
        inverse_id: "",
        formula: r"(-1)^k \prod_{j=0}^{k-1}\, (j - n)(j + n)",
    },
    Entry {
        name: "CentralSetInv",
        step: recurrences::central_set_inv,
        similars: &["A269944", "A204579"],
        inverse_id: "A269945",
        formula: "",
    },
    Entry {
        name: "CompositionLP",
        step: recurrences::composition_lp,
        similars: &["A048004"],
        inverse_id: "A000000",
        formula: r"C_{LP}(n, k)",
    },
    Entry {
        name: "DelannoyInv",
        step: recurrences::delannoy_inv,
        similars: &["A132372", "A103136", "A033878"],
        inverse_id: "A008288",
        formula: "",
    },
    Entry {
        name: "DistLattices",
        step: recurrences::dist_lattices,
        similars: &["A050446", "A050447"],
        inverse_id: "A000000",
        formula: "",
    },
    Entry {
        name: "DyckPathsInv",
        step: recurrences::dyck_paths_inv,
        similars: &["A085478", "A129818", "A123970"],
        inverse_id: "A039599",
        formula: r"\binom{n+k}{2k}",
    },
    Entry {
        name: "FallingFactorial",
        step: recurrences::falling_factorial,
        similars: &["A008279", "A068424", "A094587", "A173333", "A181511"],
        inverse_id: "",
        formula: r"n! / (n - k)!",
    },
    Entry {
        name: "LucasInv",
        step: recurrences::lucas_inv,
        similars: &["A112857"],
        inverse_id: "A029635",
        formula: r"\sum_{j=k^n} \binom{n}{j} \binom{j-1}{k-1}",
    },
    Entry {
        name: "MotzkinInv",
        step: recurrences::motzkin_inv,
        similars: &["A104562", "A101950", "A344566"],
        inverse_id: "A064189",
        formula: r"\binom{n}{k} \text{Hyper}([(k-n)/2, (k-n+1)/2], [k+2], 4)",
    },
    Entry {
        name: "Narayana2",
        step: recurrences::narayana2,
        similars: &["A352687"],
        inverse_id: "A000000",
        formula: "",
    },
    Entry {
        name: "PolyaTreeAcc",
        step: recurrences::polya_tree_acc,
        similars: &["A375467"],
        inverse_id: "",
        formula: "",
    },
    Entry {
        name: "Powers",
        step: recurrences::powers,
        similars: &["A004248", "A009998", "A051129"],
        inverse_id: "A000000",
        formula: r"k^{n - k}",
    },
    Entry {
        name: "RencontresInv",
        step: recurrences::rencontres_inv,
        similars: &["A055137"],
        inverse_id: "A008290",
        formula: r"\binom{n}{k} (n-k-1)",
    },
    Entry {
        name: "RisingFactorial",
        step: recurrences::rising_factorial,
        similars: &["A124320"],
        inverse_id: "",
        formula: r"k! \binom{n+k-1}{k}",
    },
    Entry {
        name: "SchroederInv",
        step: recurrences::schroeder_inv,
        similars: &["A122542", "A035607", "A113413", "A119800", "A266213"],
        inverse_id: "",
        formula: "",
    },
    Entry {
        name: "Sidi",
        step: recurrences::sidi,
        similars: &["A258773"],
        inverse_id: "",
        formula: r"(-1)^(n-k) \binom{n}{k} k^n",
    },
    Entry {
        name: "StirlingCycleB",
        step: recurrences::stirling_cycle_b,
        similars: &["A028338", "A039757", "A039758", "A109692"],
        inverse_id: "A000000",
        formula: r"\sum_{i=k}^{n} (-2)^{n-i} \binom{i}{k} {n \brack i}",
    },
];

fn build(entry: &Entry) -> Triangle {
    let mut recurrence = Recurrence::new(entry.name, entry.step);
    if entry.name == "PolyaTreeAcc" {
        recurrence = recurrence.with_row_limit(POLYA_TREE_ROW_LIMIT);
    }
    let identity = Identity::new(entry.name)
        .with_similars(entry.similars)
        .with_inverse(entry.inverse_id)
        .with_formula(entry.formula);
    Triangle::new(recurrence, identity)
}

static LIBRARY: OnceLock<Vec<Triangle>> = OnceLock::new();

/// Every library triangle, sorted by name.
pub fn all() -> &'static [Triangle] {
    LIBRARY.get_or_init(|| ENTRIES.iter().map(build).collect())
}

pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|entry| entry.name)
}

/// Look up a triangle by name.
pub fn get(name: &str) -> Result<&'static Triangle> {
    all()
        .iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| TriangleError::UnknownTriangle(name.to_string()))
}

fn by_index(index: usize) -> &'static Triangle {
    &all()[index]
}

/// Pascal's triangle, used by the binomial convolution traits.
pub fn binomial() -> &'static Triangle {
    by_index(0)
}

/// The signed binomial triangle, inverse of [`binomial`].
pub fn binomial_inv() -> &'static Triangle {
    by_index(1)
}

/// All A-numbers listed as similar to some library triangle, sorted.
pub fn similars_list() -> Vec<&'static str> {
    let mut bag: Vec<&'static str> = ENTRIES
        .iter()
        .flat_map(|entry| entry.similars.iter().copied())
        .collect();
    bag.sort_unstable();
    bag
}

pub fn is_similar_in_library(anum: &str) -> bool {
    similars_list().binary_search(&anum).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 19);
        assert_eq!(names().count(), 19);
        assert_eq!(binomial().name(), "Binomial");
        assert_eq!(binomial_inv().name(), "BinomialInv");
        let mut sorted: Vec<&str> = names().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, names().collect::<Vec<_>>());
    }

    #[test]
    fn test_get() {
        let t = get("Powers").unwrap();
        assert_eq!(t.identity().similars, vec!["A004248", "A009998", "A051129"]);
        assert_eq!(t.row(3).unwrap()[2], BigInt::from(2));
        assert!(matches!(
            get("NoSuchTriangle"),
            Err(TriangleError::UnknownTriangle(name)) if name == "NoSuchTriangle"
        ));
    }

    #[test]
    fn test_invertibility_claims() {
        assert!(get("Binomial").unwrap().is_invertible());
        assert!(!get("Sidi").unwrap().is_invertible());
        assert!(!get("FallingFactorial").unwrap().is_invertible());
    }

    #[test]
    fn test_polya_tree_row_limit() {
        let t = get("PolyaTreeAcc").unwrap();
        assert!(matches!(
            t.row(POLYA_TREE_ROW_LIMIT + 1),
            Err(TriangleError::TooLarge { row: 201, limit: 200, .. })
        ));
    }

    #[test]
    fn test_similars() {
        let list = similars_list();
        assert!(list.windows(2).all(|w| w[0] <= w[1]));
        assert!(is_similar_in_library("A007318"));
        assert!(is_similar_in_library("A050447"));
        assert!(!is_similar_in_library("A000045"));
    }
}
