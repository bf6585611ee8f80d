//! # Store Errors
//!
//! Error types for the index store.
//!
//! Absence is never an error here: lookups return `Option`, removals
//! return `bool`. The only identity violation a caller can commit is
//! inserting a duplicate id.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Index store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this id is already present
    #[error("duplicate member id: {0}")]
    DuplicateId(String),
}
