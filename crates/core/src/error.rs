//! Construction errors for scalar values
//!
//! Validation happens at construction time, in the producing layer. The
//! codec layer assumes every value it receives already satisfies these
//! constraints and never re-validates.

use thiserror::Error;

/// Error raised when constructing a scalar value from invalid parts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// Ref identifier is empty or contains characters outside the
    /// reference syntax (alphanumeric plus `_ : - . ~`)
    #[error("Invalid ref id: {0:?}")]
    InvalidRefId(String),

    /// Latitude outside the -90..90 range
    #[error("Latitude out of range: {0}")]
    LatitudeRange(f64),

    /// Longitude outside the -180..180 range
    #[error("Longitude out of range: {0}")]
    LongitudeRange(f64),

    /// XStr type name must start with an uppercase ASCII letter and
    /// contain only ASCII alphanumerics and underscores
    #[error("Invalid xstr type name: {0:?}")]
    InvalidTypeName(String),
}
