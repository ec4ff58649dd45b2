//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

use super::ListingKind;

/// The primary error type for the `core` module.
///
/// Only catalog loading can fail. Filtering, bookmarking and table
/// operations are total and never return an error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents an I/O error while reading a catalog file.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// Represents a catalog document that is not valid JSON or does not match the schema.
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two listings of the same kind share an identifier.
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: ListingKind, id: String },

    /// A listing was stored in the collection of another kind.
    #[error("Listing {id} is a {found} but was stored under {expected}")]
    KindMismatch {
        id: String,
        expected: ListingKind,
        found: ListingKind,
    },
}
