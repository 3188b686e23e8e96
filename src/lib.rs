//! # tagval
//!
//! Typed scalar-value codec system for Haystack-style tag data.
//!
//! tagval models a small closed family of domain scalar types - [`Number`],
//! [`Ref`], [`Coord`], [`Bin`] and [`XStr`] - and, for each, a [`Kind`]
//! descriptor able to report a canonical default value, classify itself,
//! and serialize concrete values into three independent wire formats.
//!
//! ## Quick Start
//!
//! ```
//! use tagval::prelude::*;
//!
//! // Values are immutable value objects, validated at construction
//! let val = Scalar::from(Coord::new(37.7749, -122.4194)?);
//!
//! // Kinds are resolved by name or from a value, and encode per format
//! let kind = Kind::for_name("Coord").expect("registered kind");
//! assert_eq!(kind.encode(&val, Format::Json)?, "c:37.7749,-122.4194");
//! assert_eq!(kind.encode(&val, Format::Axon)?, "coord(37.7749,-122.4194)");
//!
//! // Every kind produces a canonical default
//! assert_eq!(kind.def_val(), Scalar::from(Coord::new(0.0, 0.0)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate layout
//!
//! - `tagval-core` - the value variants and their intrinsic textual forms
//! - `tagval-codec` - the kind registry and the zinc/JSON/axon encoders
//!
//! This facade re-exports both. The whole library is a pure, synchronous
//! transformation layer: no I/O, no shared mutable state, and every type
//! is safely shared across threads once constructed.

#![warn(missing_docs)]

pub mod prelude;

pub use tagval_codec::{encode_axon, encode_json, encode_zinc, CodecError, Format, Kind, KindFamily};
pub use tagval_core::{Bin, Coord, Number, Ref, Scalar, Unit, ValueError, XStr};
