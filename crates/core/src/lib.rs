//! Core scalar value types for tagval
//!
//! This crate defines the closed set of scalar value variants handled by the
//! tagval codec system. Every variant is an immutable value object:
//!
//! | Variant | Payload | Canonical default |
//! |---------|---------|-------------------|
//! | [`Number`] | f64 magnitude + optional [`Unit`] | `0` (unitless) |
//! | [`Ref`] | identifier + optional display string | `@null` |
//! | [`Coord`] | latitude/longitude pair | `C(0.0,0.0)` |
//! | [`Bin`] | MIME type | `Bin("text/plain")` |
//! | [`XStr`] | type name + string payload | `XStr("")` |
//!
//! ## Equality Rules
//!
//! Variants compare by structural equality. `Number` uses IEEE-754 float
//! semantics: `NaN != NaN`, `-0.0 == 0.0`. Two numbers with different units
//! are never equal, even when the magnitudes would convert to the same
//! quantity - there is no implicit unit conversion anywhere in this crate.
//!
//! Encoding lives in `tagval-codec`; this crate only owns the values and
//! their intrinsic textual forms (`Display`, `to_code`, `to_json` fragments).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bin;
mod coord;
mod error;
mod number;
mod ref_val;
mod scalar;
pub mod text;
mod unit;
mod xstr;

pub use bin::Bin;
pub use coord::Coord;
pub use error::ValueError;
pub use number::Number;
pub use ref_val::Ref;
pub use scalar::Scalar;
pub use unit::Unit;
pub use xstr::XStr;
