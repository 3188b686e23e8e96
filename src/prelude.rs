//! Convenience re-exports for typical usage
//!
//! ```
//! use tagval::prelude::*;
//! ```

pub use tagval_codec::{CodecError, Format, Kind, KindFamily};
pub use tagval_core::{Bin, Coord, Number, Ref, Scalar, Unit, ValueError, XStr};
