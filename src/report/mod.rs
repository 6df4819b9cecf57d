// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reporting: turning triangles and their traits into text and JSON.

pub mod database;
pub mod lookup;

pub use database::{
    anumber_dict, filter_unique, num_to_anum, summarize, trait_key, DictSummary, TraitDatabase,
    TraitDict,
};
pub use lookup::{KnownSequences, Lookup, SequenceLookup};

use crate::config::{Config, RenderConfig};
use crate::traits::all_traits;
use crate::triangle::{Triangle, TriangleError};
use num_bigint::BigInt;
use num_traits::Signed;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

/// Render a sequence as text, each term followed by `sep`.
///
/// Starts at term `offset` and stops before `max_terms` terms or
/// `max_chars` characters would be exceeded.
pub fn seq_to_string(
    seq: &[BigInt],
    max_chars: usize,
    max_terms: usize,
    sep: &str,
    offset: usize,
    abs: bool,
) -> String {
    let mut out = String::new();
    for term in seq.iter().skip(offset).take(max_terms) {
        let text = if abs {
            term.abs().to_string()
        } else {
            term.to_string()
        };
        if out.len() + text.len() + sep.len() > max_chars {
            break;
        }
        out.push_str(&text);
        out.push_str(sep);
    }
    out
}

/// [`seq_to_string`] with the configured limits.
pub fn render_sequence(seq: &[BigInt], render: &RenderConfig) -> String {
    seq_to_string(
        seq,
        render.max_chars,
        render.max_terms,
        &render.separator,
        0,
        false,
    )
}

/// 64-bit FNV-1a of `text`, as lower-case hex without leading zeros.
pub fn fnv_hash(text: &str) -> String {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let hash = text
        .bytes()
        .fold(OFFSET_BASIS, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME));
    format!("{:x}", hash)
}

/// A text report on one triangle: every trait, its identity, then its first rows.
pub fn inspect(t: &Triangle, config: &Config) -> Result<String, ReportError> {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out);
    for info in all_traits() {
        let seq = info.id.evaluate(t)?;
        let _ = writeln!(out, "{:<24} {}", trait_key(t.name(), info.id), info.formula);
        let _ = writeln!(out, "{}", render_sequence(&seq, &config.render));
    }
    let identity = t.identity();
    let _ = writeln!(out);
    let _ = writeln!(out, "NAME        {}", identity.name);
    let _ = writeln!(out, "Formula     {}", identity.formula);
    let _ = writeln!(out, "Similars    {:?}", identity.similars);
    let inverse = if t.is_invertible() {
        identity.inverse_id.as_str()
    } else {
        "None"
    };
    let _ = writeln!(out, "Inverse     {}", inverse);
    let _ = writeln!(out);
    let _ = writeln!(out, "TABLE");
    out.push_str(&t.render(config.inspect_rows)?);
    Ok(out)
}

/// Every trait sequence of every triangle, keyed `"<Table>_<Trait>"`.
///
/// Terms are written as decimal strings so they survive JSON readers
/// without big integers.
pub fn trait_sequences(
    triangles: &[&Triangle],
) -> Result<BTreeMap<String, Vec<String>>, ReportError> {
    let mut sequences = BTreeMap::new();
    for t in triangles {
        for info in all_traits() {
            let seq = info.id.evaluate(t)?;
            sequences.insert(
                trait_key(t.name(), info.id),
                seq.iter().map(|v| v.to_string()).collect(),
            );
        }
    }
    Ok(sequences)
}

/// Write [`trait_sequences`] to `path` as pretty JSON.
pub fn export_sequences(triangles: &[&Triangle], path: impl AsRef<Path>) -> Result<usize, ReportError> {
    let sequences = trait_sequences(triangles)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &sequences)?;
    Ok(sequences.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_seq_to_string_limits() {
        let seq = ints(&[1, -2, 3, -4, 5]);
        assert_eq!(seq_to_string(&seq, 60, 20, " ", 0, false), "1 -2 3 -4 5 ");
        assert_eq!(seq_to_string(&seq, 60, 3, ",", 0, false), "1,-2,3,");
        assert_eq!(seq_to_string(&seq, 60, 20, ",", 1, true), "2,3,4,5,");
        // "1 -2 " is 5 characters; "3 " would make 7.
        assert_eq!(seq_to_string(&seq, 6, 20, " ", 0, false), "1 -2 ");
        assert_eq!(seq_to_string(&[], 60, 20, " ", 0, false), "");
    }

    #[test]
    fn test_fnv_hash() {
        assert_eq!(fnv_hash(""), "cbf29ce484222325");
        assert_eq!(fnv_hash("a"), "af63dc4c8601ec8c");
        assert_eq!(fnv_hash("foobar"), "85944171f73967e8");
    }

    #[test]
    fn test_inspect() {
        let binomial = library::binomial();
        let report = inspect(binomial, &Config::default()).unwrap();
        assert!(report.contains("Binomial_TablSum"));
        assert!(report.contains("1 2 4 8 16 32 64 "));
        assert!(report.contains("Inverse     A130595"));
        assert!(report.contains("[9] [1, 9, 36, 84, 126, 126, 84, 36, 9, 1]"));
        assert!(!report.contains("[10]"));
    }

    #[test]
    fn test_trait_sequences() {
        let sequences = trait_sequences(&[library::binomial()]).unwrap();
        assert_eq!(sequences.len(), 70);
        assert_eq!(sequences["Binomial_TablSum"][..4], ["1", "2", "4", "8"]);
    }
}
