//! Axon expression-literal encoding
//!
//! Produces a re-parseable function-call-style literal for the expression
//! language. Non-finite numbers become the named literals `nan()`,
//! `posInf()` and `negInf()` instead of raw float text; the NaN check runs
//! before either infinity comparison, since NaN compares false against
//! everything and would otherwise fall through to the wrong branch.
//!
//! Bin has no literal of its own in the expression language and reuses the
//! xstr form: `xstr("Bin","text/plain")`.

use tagval_core::{text::to_code, Scalar};

/// Encode a scalar as its axon expression literal
///
/// # Examples
///
/// ```
/// use tagval_codec::encode_axon;
/// use tagval_core::{Number, Scalar};
///
/// assert_eq!(encode_axon(&Scalar::from(Number::new(f64::NAN))), "nan()");
/// assert_eq!(encode_axon(&Scalar::from(Number::new(42.0))), "42");
/// ```
pub fn encode_axon(val: &Scalar) -> String {
    match val {
        Scalar::Number(n) => {
            let f = n.value();
            if f.is_nan() {
                return "nan()".to_string();
            }
            if f == f64::INFINITY {
                return "posInf()".to_string();
            }
            if f == f64::NEG_INFINITY {
                return "negInf()".to_string();
            }
            n.to_string()
        }
        Scalar::Ref(r) => r.to_code(),
        Scalar::Coord(c) => format!("coord({})", c.to_lat_lng_str()),
        Scalar::Bin(b) => format!("xstr(\"Bin\",{})", to_code(b.mime())),
        Scalar::XStr(x) => format!("xstr({}, {})", to_code(x.typename()), to_code(x.val())),
    }
}
