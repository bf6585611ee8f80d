//! # Model Errors
//!
//! Error types for the member record model.

use thiserror::Error;

use super::member::MembershipKind;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Member record contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A variant-gated accessor was used on a record of the wrong variant.
    ///
    /// This is a programming-contract violation, not a recoverable data
    /// condition; callers that cannot continue should treat it as fatal.
    #[error("invalid membership variant: expected {expected:?}, got {actual:?}")]
    InvalidVariant {
        /// Variant the accessor is defined for
        expected: MembershipKind,
        /// Variant the record actually carries
        actual: MembershipKind,
    },
}
