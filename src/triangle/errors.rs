// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for triangle operations.
//!
//! Only recoverable conditions live here. Broken invariants (a row of the
//! wrong length, a column index past the end of its row) are programmer
//! errors in a row generator and panic instead.

use thiserror::Error;

/// Errors that can occur while generating or deriving rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangleError {
    /// The generator refuses to produce a row this far out.
    #[error("{name}: row {row} is too large (limit {limit})")]
    TooLarge {
        name: String,
        row: usize,
        limit: usize,
    },

    /// No triangle with this name is registered.
    #[error("unknown triangle '{0}'")]
    UnknownTriangle(String),

    /// No trait with this name is in the catalog.
    #[error("unknown trait '{0}'")]
    UnknownTrait(String),
}

/// Result alias used throughout the triangle and trait modules.
pub type Result<T> = std::result::Result<T, TriangleError>;
