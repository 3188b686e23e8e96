//! The closed scalar variant set
//!
//! [`Scalar`] wraps exactly one of the five value types. The set is closed:
//! every codec in `tagval-codec` matches exhaustively over these variants,
//! so adding a variant is a compile-time visible change everywhere.

use crate::{Bin, Coord, Number, Ref, XStr};
use serde::{Deserialize, Serialize};

/// One scalar value of the closed variant set
///
/// Different variants are never equal and there is no coercion between
/// them: `Number(1)` is not `XStr("Number", "1")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// Numeric magnitude with optional unit
    Number(Number),
    /// Reference to another record
    Ref(Ref),
    /// Geographic coordinate
    Coord(Coord),
    /// Binary blob descriptor (MIME type only)
    Bin(Bin),
    /// Extended typed string
    XStr(XStr),
}

impl Scalar {
    /// The variant's stable type name (for kind lookup and error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Number(_) => "Number",
            Scalar::Ref(_) => "Ref",
            Scalar::Coord(_) => "Coord",
            Scalar::Bin(_) => "Bin",
            Scalar::XStr(_) => "XStr",
        }
    }

    /// Try to get as a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Scalar::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as a ref
    pub fn as_ref_val(&self) -> Option<&Ref> {
        match self {
            Scalar::Ref(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get as a coordinate
    pub fn as_coord(&self) -> Option<&Coord> {
        match self {
            Scalar::Coord(c) => Some(c),
            _ => None,
        }
    }

    /// Try to get as a bin
    pub fn as_bin(&self) -> Option<&Bin> {
        match self {
            Scalar::Bin(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as an xstr
    pub fn as_xstr(&self) -> Option<&XStr> {
        match self {
            Scalar::XStr(x) => Some(x),
            _ => None,
        }
    }
}

impl From<Number> for Scalar {
    fn from(v: Number) -> Scalar {
        Scalar::Number(v)
    }
}

impl From<Ref> for Scalar {
    fn from(v: Ref) -> Scalar {
        Scalar::Ref(v)
    }
}

impl From<Coord> for Scalar {
    fn from(v: Coord) -> Scalar {
        Scalar::Coord(v)
    }
}

impl From<Bin> for Scalar {
    fn from(v: Bin) -> Scalar {
        Scalar::Bin(v)
    }
}

impl From<XStr> for Scalar {
    fn from(v: XStr) -> Scalar {
        Scalar::XStr(v)
    }
}

impl std::fmt::Display for Scalar {
    /// Displays the variant's own textual form
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(v) => v.fmt(f),
            Scalar::Ref(v) => v.fmt(f),
            Scalar::Coord(v) => v.fmt(f),
            Scalar::Bin(v) => v.fmt(f),
            Scalar::XStr(v) => v.fmt(f),
        }
    }
}
