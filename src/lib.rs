// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer triangles and the sequences derived from them.
//!
//! A triangle is a lower-triangular array of exact integers, generated one
//! row at a time: row `n` has `n + 1` entries `T(n, 0) ..= T(n, n)`. From the
//! rows alone the crate derives a uniform set of views and transforms,
//! including the exact matrix inverse where it is integral.
//!
//! # Layers
//!
//! - [`matrix`]: exact inversion of lower-triangular integer matrices,
//!   by Gauss–Jordan elimination over the rationals.
//! - [`triangle`]: the [`Triangle`] type, its row generators and the
//!   derived (reversed, alternating, offset) triangles.
//! - [`traits`]: the closed catalog of named trait sequences.
//! - [`library`]: a registry of named triangles defined by recurrences.
//! - [`report`]: text and JSON output, trait dictionaries, sequence lookup.
//! - [`config`]: runtime settings for the report layer and the CLI.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use tabl::{library, traits::TraitId};
//!
//! let binomial = library::get("Binomial").unwrap();
//! let sums = TraitId::TablSum.evaluate_with(binomial, 5).unwrap();
//! assert_eq!(sums, [1, 2, 4, 8, 16].map(BigInt::from));
//! ```

pub mod config;
pub mod library;
pub mod matrix;
pub mod report;
pub mod traits;
pub mod triangle;

pub use config::Config;
pub use matrix::Row;
pub use traits::{TraitId, TraitInfo};
pub use triangle::{Identity, RowGenerator, Triangle, TriangleError};
