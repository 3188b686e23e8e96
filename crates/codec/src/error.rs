//! Codec error types
//!
//! Only one failure exists at this layer: invoking a kind on a value of a
//! different variant. Registry misses are an `Option::None` from
//! [`crate::Kind::for_name`], not an error - most callers treat an unknown
//! kind name as "schema unknown" rather than a fault.

use thiserror::Error;

/// Error raised by kind-checked encoding
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value's runtime variant does not match the kind invoked on it
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind's variant name
        expected: &'static str,
        /// The value's actual variant name
        actual: &'static str,
    },
}
