//! Property tests for the three encoders
//!
//! Every well-formed scalar must encode in every format without panicking,
//! the JSON prefix must identify the variant, and kind-checked encoding
//! must agree with the free encoders on matching variants while rejecting
//! every mismatched pairing.

use proptest::prelude::*;
use tagval_codec::{encode_axon, encode_json, encode_zinc, Format, Kind};
use tagval_core::{Bin, Coord, Number, Ref, Scalar, Unit, XStr};

fn ref_strategy() -> impl Strategy<Value = Ref> {
    "[a-zA-Z0-9_:.~-]{1,16}".prop_map(|id| Ref::new(id).expect("charset is valid"))
}

fn number_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<f64>().prop_map(Number::new),
        (any::<f64>(), prop_oneof!["ms", "sec", "min", "hr", "day", "%"]).prop_map(|(v, u)| {
            Number::with_unit(v, Unit::from_symbol(&u).expect("builtin symbol"))
        }),
    ]
}

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        number_strategy().prop_map(Scalar::from),
        ref_strategy().prop_map(Scalar::from),
        (-90.0..=90.0f64, -180.0..=180.0f64)
            .prop_map(|(lat, lng)| Scalar::from(Coord::new(lat, lng).expect("in range"))),
        "[a-z]{1,8}/[a-z]{1,8}".prop_map(|m| Scalar::from(Bin::new(m))),
        ("[A-Z][a-zA-Z0-9_]{0,8}", ".{0,20}").prop_map(|(t, v)| {
            Scalar::from(XStr::new(t, v).expect("typename charset is valid"))
        }),
    ]
}

proptest! {
    #[test]
    fn encode_is_total(val in scalar_strategy()) {
        // All three encoders are pure and never panic for well-formed values
        let _ = encode_zinc(&val);
        let _ = encode_json(&val);
        let _ = encode_axon(&val);
    }

    #[test]
    fn json_prefix_identifies_variant(val in scalar_strategy()) {
        let json = encode_json(&val);
        let expected = match &val {
            Scalar::Number(_) => "n:",
            Scalar::Ref(_) => "r:",
            Scalar::Coord(_) => "c:",
            Scalar::Bin(_) => "b:",
            Scalar::XStr(_) => "x:",
        };
        prop_assert!(json.starts_with(expected), "{:?} -> {:?}", val, json);
    }

    #[test]
    fn kind_checked_encode_agrees_with_free_encoders(val in scalar_strategy()) {
        let kind = Kind::of(&val);
        prop_assert_eq!(kind.encode(&val, Format::Zinc).unwrap(), encode_zinc(&val));
        prop_assert_eq!(kind.encode(&val, Format::Json).unwrap(), encode_json(&val));
        prop_assert_eq!(kind.encode(&val, Format::Axon).unwrap(), encode_axon(&val));
    }

    #[test]
    fn mismatched_kind_always_errors(val in scalar_strategy(), other in scalar_strategy()) {
        let kind = Kind::of(&other);
        prop_assume!(kind.family() != Kind::of(&val).family());
        for format in [Format::Zinc, Format::Json, Format::Axon] {
            prop_assert!(kind.encode(&val, format).is_err());
        }
    }

    #[test]
    fn axon_number_sentinels_are_named_literals(v in any::<f64>()) {
        let axon = encode_axon(&Scalar::from(Number::new(v)));
        if v.is_nan() {
            prop_assert_eq!(axon, "nan()");
        } else if v == f64::INFINITY {
            prop_assert_eq!(axon, "posInf()");
        } else if v == f64::NEG_INFINITY {
            prop_assert_eq!(axon, "negInf()");
        } else {
            prop_assert!(!axon.ends_with("()"), "finite {} must not use a sentinel", v);
        }
    }

    #[test]
    fn ref_zinc_form_starts_with_code(r in ref_strategy()) {
        let zinc = encode_zinc(&Scalar::from(r.clone()));
        let expected_prefix = format!("@{}", r.id());
        prop_assert!(zinc.starts_with(&expected_prefix));
    }

    #[test]
    fn duration_unit_ignores_sign(ticks in 1i64..200_000_000_000_000) {
        let pos = Number::from_ticks(ticks);
        let neg = Number::from_ticks(-ticks);
        prop_assert_eq!(pos.unit(), neg.unit());
        prop_assert_eq!(pos.value(), -neg.value());
    }
}
