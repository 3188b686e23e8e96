//! Kind registry and textual encodings for tagval scalar values
//!
//! This crate implements the codec contract for the five scalar variants in
//! `tagval-core`. Every variant has one [`Kind`] descriptor providing
//! classification, a canonical default value, and three independent string
//! encodings:
//!
//! | Variant | Zinc (grid literal) | JSON string | Axon (expression) |
//! |---------|--------------------|-------------|-------------------|
//! | Number | `45.5°F`, `NaN` | `n:45.5 °F` | `45.5°F`, `nan()` |
//! | Ref | `@id "dis"` | `r:id dis` | `@id` |
//! | Coord | `C(lat,lng)` | `c:lat,lng` | `coord(lat,lng)` |
//! | Bin | `Bin("mime")` | `b:mime` | `xstr("Bin","mime")` |
//! | XStr | `Type("payload")` | `x:Type:payload` | `xstr("Type", "payload")` |
//!
//! The JSON encoding uses a closed one-letter prefix vocabulary (`n`, `r`,
//! `c`, `b`, `x`) so consumers can tell encoded scalars apart from plain
//! strings. No two kinds share a prefix.
//!
//! ## Examples
//!
//! ```
//! use tagval_codec::{encode_json, Format, Kind};
//! use tagval_core::{Coord, Scalar};
//!
//! let val = Scalar::from(Coord::new(37.7749, -122.4194).unwrap());
//! assert_eq!(encode_json(&val), "c:37.7749,-122.4194");
//!
//! let kind = Kind::for_name("Coord").unwrap();
//! assert_eq!(kind.encode(&val, Format::Json).unwrap(), "c:37.7749,-122.4194");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod axon;
mod error;
mod json;
mod kind;
mod zinc;

pub use axon::encode_axon;
pub use error::CodecError;
pub use json::encode_json;
pub use kind::{Format, Kind, KindFamily};
pub use zinc::encode_zinc;
