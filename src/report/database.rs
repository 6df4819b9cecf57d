// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trait dictionaries and their JSON cache.
//!
//! A [`TraitDict`] maps `"<Table>_<Trait>"` to the A-number of the trait
//! sequence, with 0 meaning the sequence was looked up and not found. A
//! [`TraitDatabase`] holds one dictionary per triangle and is saved as a
//! flat JSON object.

use super::lookup::{Lookup, SequenceLookup};
use super::ReportError;
use crate::traits::{all_traits, TraitId};
use crate::triangle::Triangle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;
use tracing::{info, warn};

pub type TraitDict = BTreeMap<String, u64>;

/// The dictionary key of a trait of a triangle.
pub fn trait_key(table: &str, trait_id: TraitId) -> String {
    format!("{}_{}", table, trait_id)
}

/// Split a dictionary key into table name and trait.
pub fn split_key(key: &str) -> Option<(&str, TraitId)> {
    let (table, name) = key.split_once('_')?;
    Some((table, TraitId::parse(name).ok()?))
}

/// Look up every non-empty trait sequence of `t`.
///
/// Traits that the lookup could not answer are left out of the dictionary.
pub fn anumber_dict(t: &Triangle, lookup: &dyn SequenceLookup) -> Result<TraitDict, ReportError> {
    info!("[{}] building trait dictionary", t.name());
    let mut dict = TraitDict::new();
    let mut unreachable = 0;
    for info in all_traits() {
        let seq = info.id.evaluate(t)?;
        if seq.is_empty() {
            continue;
        }
        let anum = match lookup.lookup(&seq) {
            Lookup::Found(anum) => anum,
            Lookup::NotFound => 0,
            Lookup::Unreachable => {
                unreachable += 1;
                continue;
            }
        };
        dict.insert(trait_key(t.name(), info.id), anum);
    }
    if unreachable > 0 {
        warn!(
            "[{}] sequence lookup unreachable for {} traits",
            t.name(),
            unreachable
        );
    }
    Ok(dict)
}

/// Keep only the first key for each A-number.
pub fn filter_unique(dict: &TraitDict) -> TraitDict {
    let mut seen = BTreeSet::new();
    dict.iter()
        .filter(|(_, anum)| seen.insert(**anum))
        .map(|(key, anum)| (key.clone(), *anum))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictSummary {
    /// Number of different A-numbers found.
    pub distinct: usize,
    pub hits: usize,
    pub misses: usize,
}

pub fn summarize(dict: &TraitDict) -> DictSummary {
    let misses = dict.values().filter(|anum| **anum == 0).count();
    let distinct = dict
        .values()
        .filter(|anum| **anum != 0)
        .collect::<BTreeSet<_>>()
        .len();
    DictSummary {
        distinct,
        hits: dict.len() - misses,
        misses,
    }
}

/// `"A000045"` from 45.
pub fn num_to_anum(anum: u64) -> String {
    format!("A{:06}", anum)
}

/// Trait dictionaries of many triangles, keyed by triangle name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitDatabase {
    tables: BTreeMap<String, TraitDict>,
}

impl TraitDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a database; a missing file gives an empty one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no trait database at {}; starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let database: Self = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "loaded trait database for {} triangles from {}",
            database.tables.len(),
            path.display()
        );
        Ok(database)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!(
            "saved trait database for {} triangles to {}",
            self.tables.len(),
            path.display()
        );
        Ok(())
    }

    pub fn insert(&mut self, table: impl Into<String>, dict: TraitDict) {
        self.tables.insert(table.into(), dict);
    }

    pub fn get(&self, table: &str) -> Option<&TraitDict> {
        self.tables.get(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &TraitDict)> {
        self.tables.iter().map(|(name, dict)| (name.as_str(), dict))
    }

    /// Where an A-number occurs, as `"<Trait>(<Table>)"`.
    pub fn anum_occurrences(&self, anum: u64) -> Vec<String> {
        self.tables
            .values()
            .flat_map(|dict| dict.iter())
            .filter(|(_, found)| **found == anum)
            .filter_map(|(key, _)| split_key(key))
            .map(|(table, trait_id)| format!("{}({})", trait_id, table))
            .collect()
    }

    /// The A-number of one trait across all triangles that record it.
    pub fn trait_occurrences(&self, trait_id: TraitId) -> BTreeMap<String, u64> {
        self.tables
            .iter()
            .filter_map(|(table, dict)| {
                dict.get(&trait_key(table, trait_id))
                    .map(|anum| (table.clone(), *anum))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::lookup::KnownSequences;
    use crate::triangle::{FnGenerator, Identity};
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    fn dict(entries: &[(&str, u64)]) -> TraitDict {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_keys() {
        assert_eq!(trait_key("Binomial", TraitId::TablSum), "Binomial_TablSum");
        assert_eq!(
            split_key("Binomial_RevPolyDiag"),
            Some(("Binomial", TraitId::RevPolyDiag))
        );
        assert_eq!(split_key("Binomial"), None);
        assert_eq!(split_key("Binomial_Nothing"), None);
    }

    #[test]
    fn test_num_to_anum() {
        assert_eq!(num_to_anum(45), "A000045");
        assert_eq!(num_to_anum(1234567), "A1234567");
    }

    #[test]
    fn test_filter_unique_and_summarize() {
        let d = dict(&[
            ("T_AltSum", 0),
            ("T_TablCol0", 12),
            ("T_TablSum", 79),
            ("T_Triangle", 7318),
            ("T_Trev", 7318),
            ("T_Tinv", 0),
        ]);
        let unique = filter_unique(&d);
        assert_eq!(
            unique,
            dict(&[
                ("T_AltSum", 0),
                ("T_TablCol0", 12),
                ("T_TablSum", 79),
                ("T_Trev", 7318),
            ])
        );
        assert_eq!(
            summarize(&d),
            DictSummary {
                distinct: 3,
                hits: 4,
                misses: 2
            }
        );
    }

    #[test]
    fn test_anumber_dict() {
        let ones = Triangle::new(
            FnGenerator(|n: usize| vec![BigInt::from(1); n + 1]),
            Identity::new("Ones"),
        );
        let mut known = KnownSequences::new();
        // Row sums of the all-ones triangle are 1, 2, 3, ...
        known.insert(27, (1..40).map(BigInt::from).collect());
        let d = anumber_dict(&ones, &known).unwrap();
        assert_eq!(d.get("Ones_TablSum"), Some(&27));
        assert_eq!(d.get("Ones_TablCol0"), Some(&0));
        // No inverse is claimed, so the inverse trait is empty and skipped.
        assert_eq!(d.get("Ones_Tinv"), None);
    }

    struct Offline;

    impl SequenceLookup for Offline {
        fn lookup(&self, _seq: &[BigInt]) -> Lookup {
            Lookup::Unreachable
        }
    }

    #[test]
    fn test_unreachable_traits_are_skipped() {
        let ones = Triangle::new(
            FnGenerator(|n: usize| vec![BigInt::from(1); n + 1]),
            Identity::new("Ones"),
        );
        assert!(anumber_dict(&ones, &Offline).unwrap().is_empty());
    }

    #[test]
    fn test_occurrences() {
        let mut db = TraitDatabase::new();
        db.insert("A", dict(&[("A_TablSum", 79), ("A_Triangle", 7318)]));
        db.insert("B", dict(&[("B_TablSum", 0), ("B_AltSum", 79)]));
        assert_eq!(db.anum_occurrences(79), vec!["TablSum(A)", "AltSum(B)"]);
        let sums = db.trait_occurrences(TraitId::TablSum);
        assert_eq!(sums.get("A"), Some(&79));
        assert_eq!(sums.get("B"), Some(&0));
    }
}
