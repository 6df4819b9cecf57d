// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON round-trips for the report layer and configuration.

mod common;

use common::ints;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs::File;
use tabl::config::{Config, RenderConfig};
use tabl::library;
use tabl::report::{
    anumber_dict, export_sequences, filter_unique, summarize, KnownSequences, TraitDatabase,
};
use tempfile::TempDir;

fn known() -> KnownSequences {
    let mut known = KnownSequences::new();
    known.insert(79, (0..40).map(|n| BigInt::from(2).pow(n)).collect());
    known.insert(7318, ints(&[1, 1, 1, 1, 2, 1, 1, 3, 3, 1]));
    known
}

#[test]
fn test_database_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("AllTraits.json");

    let binomial = library::binomial();
    let dict = anumber_dict(binomial, &known()).unwrap();
    assert_eq!(dict.get("Binomial_TablSum"), Some(&79));
    assert_eq!(dict.get("Binomial_Triangle"), Some(&7318));
    // Trev reads the same as the triangle itself.
    assert_eq!(dict.get("Binomial_Trev"), Some(&7318));
    let unique = filter_unique(&dict);
    assert_eq!(unique.values().filter(|anum| **anum == 7318).count(), 1);

    let mut db = TraitDatabase::new();
    db.insert("Binomial", dict.clone());
    db.save(&path).unwrap();

    let loaded = TraitDatabase::load(&path).unwrap();
    assert_eq!(loaded, db);
    assert_eq!(summarize(loaded.get("Binomial").unwrap()), summarize(&dict));
    assert!(loaded.anum_occurrences(79).contains(&"TablSum(Binomial)".to_string()));
}

#[test]
fn test_missing_database_is_empty() {
    let dir = TempDir::new().unwrap();
    let db = TraitDatabase::load(dir.path().join("absent.json")).unwrap();
    assert!(db.is_empty());
}

#[test]
fn test_malformed_database_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(TraitDatabase::load(&path).is_err());
}

#[test]
fn test_export_sequences() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sequences.json");
    let triangles = [library::binomial(), library::binomial_inv()];
    let count = export_sequences(&triangles, &path).unwrap();
    assert_eq!(count, 140);

    let read: BTreeMap<String, Vec<String>> =
        serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(read.len(), 140);
    assert_eq!(read["BinomialInv_TablSum"][..3], ["1", "0", "0"]);
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tabl.json");
    let config = Config {
        render: RenderConfig {
            max_chars: 100,
            separator: ", ".to_string(),
            ..RenderConfig::default()
        },
        inspect_rows: 5,
        ..Config::default()
    };
    config.save(&path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), config);

    std::fs::write(&path, r#"{ "inspect_rows": 3 }"#).unwrap();
    let partial = Config::from_file(&path).unwrap();
    assert_eq!(partial.inspect_rows, 3);
    assert_eq!(partial.render, RenderConfig::default());
}
