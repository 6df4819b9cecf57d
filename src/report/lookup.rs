// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Where sequences are identified.
//!
//! The crate ships no client for a remote sequence database; callers plug one
//! in by implementing [`SequenceLookup`].

use num_bigint::BigInt;

/// Outcome of asking a sequence database about one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The sequence is known under this A-number.
    Found(u64),
    NotFound,
    /// The database could not be asked; nothing is known either way.
    Unreachable,
}

pub trait SequenceLookup {
    fn lookup(&self, seq: &[BigInt]) -> Lookup;
}

/// A lookup answered from a fixed table of known sequences.
///
/// A query matches an entry when one is a prefix of the other, so a short
/// trait sequence still finds a longer stored one.
#[derive(Debug, Clone, Default)]
pub struct KnownSequences {
    known: Vec<(u64, Vec<BigInt>)>,
}

impl KnownSequences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, anum: u64, seq: Vec<BigInt>) {
        self.known.push((anum, seq));
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl SequenceLookup for KnownSequences {
    fn lookup(&self, seq: &[BigInt]) -> Lookup {
        self.known
            .iter()
            .find(|(_, known)| {
                let shared = known.len().min(seq.len());
                shared > 0 && known[..shared] == seq[..shared]
            })
            .map_or(Lookup::NotFound, |(anum, _)| Lookup::Found(*anum))
    }
}
