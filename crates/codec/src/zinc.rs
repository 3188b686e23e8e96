//! Zinc grid-literal encoding
//!
//! Produces the compact literal form used when a scalar is embedded in the
//! tabular text serialization. Most variants already print this form as
//! their `Display`; refs are the exception, since their grid form carries
//! the quoted display suffix the code form omits.

use tagval_core::Scalar;

/// Encode a scalar as its zinc grid literal
///
/// # Examples
///
/// ```
/// use tagval_codec::encode_zinc;
/// use tagval_core::{Bin, Ref, Scalar};
///
/// assert_eq!(encode_zinc(&Scalar::from(Bin::new("text/plain"))), "Bin(\"text/plain\")");
///
/// let r = Ref::with_dis("site-1", "Building 1").unwrap();
/// assert_eq!(encode_zinc(&Scalar::from(r)), "@site-1 \"Building 1\"");
/// ```
pub fn encode_zinc(val: &Scalar) -> String {
    match val {
        Scalar::Number(n) => n.to_string(),
        Scalar::Ref(r) => r.to_zinc(),
        Scalar::Coord(c) => c.to_string(),
        Scalar::Bin(b) => b.to_string(),
        Scalar::XStr(x) => x.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagval_core::{Bin, Coord, Number, Ref, Unit, XStr};

    #[test]
    fn test_number_literal() {
        assert_eq!(encode_zinc(&Scalar::from(Number::new(42.0))), "42");
        let n = Number::with_unit(45.5, Unit::from_symbol("°F").unwrap());
        assert_eq!(encode_zinc(&Scalar::from(n)), "45.5°F");
    }

    #[test]
    fn test_number_special_tokens() {
        assert_eq!(encode_zinc(&Scalar::from(Number::new(f64::NAN))), "NaN");
        assert_eq!(encode_zinc(&Scalar::from(Number::new(f64::INFINITY))), "INF");
        assert_eq!(
            encode_zinc(&Scalar::from(Number::new(f64::NEG_INFINITY))),
            "-INF"
        );
    }

    #[test]
    fn test_ref_with_and_without_dis() {
        assert_eq!(
            encode_zinc(&Scalar::from(Ref::new("site-1").unwrap())),
            "@site-1"
        );
        assert_eq!(
            encode_zinc(&Scalar::from(Ref::with_dis("site-1", "HQ").unwrap())),
            "@site-1 \"HQ\""
        );
    }

    #[test]
    fn test_coord_literal() {
        let c = Coord::new(37.7749, -122.4194).unwrap();
        assert_eq!(encode_zinc(&Scalar::from(c)), "C(37.7749,-122.4194)");
    }

    #[test]
    fn test_bin_escapes_mime() {
        assert_eq!(
            encode_zinc(&Scalar::from(Bin::new("text/pl\"ain"))),
            "Bin(\"text/pl\\\"ain\")"
        );
    }

    #[test]
    fn test_xstr_literal() {
        let x = XStr::new("Span", "today").unwrap();
        assert_eq!(encode_zinc(&Scalar::from(x)), "Span(\"today\")");
    }
}
