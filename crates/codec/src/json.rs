//! Prefix-tagged JSON string encoding
//!
//! JSON has no native types for these scalars, so each encodes as a string
//! with a reserved one-letter prefix: `n:` number, `r:` ref, `c:` coord,
//! `b:` bin, `x:` xstr. The vocabulary is closed - adding a kind means
//! claiming a new, unused prefix.
//!
//! The xstr form `x:<type>:<payload>` performs no payload escaping. If the
//! payload itself contains a colon, consumers must treat everything after
//! the second colon as the payload remainder; this codec deliberately does
//! not invent an escaping scheme the format never had.

use tagval_core::Scalar;

/// Encode a scalar as its prefix-tagged JSON string
///
/// # Examples
///
/// ```
/// use tagval_codec::encode_json;
/// use tagval_core::{Coord, Scalar, XStr};
///
/// let c = Coord::new(37.7749, -122.4194).unwrap();
/// assert_eq!(encode_json(&Scalar::from(c)), "c:37.7749,-122.4194");
///
/// let x = XStr::new("Span", "today").unwrap();
/// assert_eq!(encode_json(&Scalar::from(x)), "x:Span:today");
/// ```
pub fn encode_json(val: &Scalar) -> String {
    match val {
        Scalar::Number(n) => n.to_json(),
        Scalar::Ref(r) => r.to_json(),
        Scalar::Coord(c) => format!("c:{}", c.to_lat_lng_str()),
        Scalar::Bin(b) => format!("b:{}", b.mime()),
        Scalar::XStr(x) => format!("x:{}:{}", x.typename(), x.val()),
    }
}
