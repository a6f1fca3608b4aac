//! Error types for the seeding engine.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Subset sampling bounds violated.
    #[error("invalid subset range: {reason} (min={min}, max={max}, available={available})")]
    InvalidRange {
        reason: &'static str,
        min: usize,
        max: usize,
        available: usize,
    },

    /// A categorical vocabulary or image pool was empty.
    #[error("empty vocabulary: {0}")]
    EmptyVocabulary(&'static str),

    /// A loaded dependency collection was empty at generation time.
    #[error("no {0} available to reference")]
    EmptyDependency(&'static str),

    /// Document store failure, surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
