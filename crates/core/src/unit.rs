//! Resolved unit definitions
//!
//! A [`Unit`] is always a resolved definition by the time a [`crate::Number`]
//! carries it - never a raw unparsed string. The builtin table covers the
//! duration units the elapsed-time inference path depends on (their `scale`
//! is relative to seconds) plus a handful of common engineering symbols.
//! Symbols outside the table can still be used via [`Unit::define`], which
//! yields a scale-1 unit: display and encoding work, only duration math
//! cares about scale.

use serde::{Deserialize, Serialize};

/// Builtin unit table: (symbol, scale relative to the quantity base)
const BUILTIN: &[(&str, f64)] = &[
    // Duration units, scale in seconds
    ("ms", 0.001),
    ("sec", 1.0),
    ("min", 60.0),
    ("hr", 3600.0),
    ("day", 86400.0),
    // Common engineering units, scale 1 within their own quantity
    ("%", 1.0),
    ("°C", 1.0),
    ("°F", 1.0),
    ("kW", 1.0),
    ("kWh", 1.0),
    ("m", 1.0),
    ("ft", 1.0),
    ("L/s", 1.0),
    ("psi", 1.0),
];

/// A resolved symbolic unit
///
/// Units compare by symbol and scale; there is no implicit conversion
/// between units anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    symbol: String,
    scale: f64,
}

impl Unit {
    /// Resolve a symbol from the builtin table
    ///
    /// Returns `None` for unknown symbols; use [`Unit::define`] to create
    /// an ad-hoc unit instead.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        BUILTIN
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(s, scale)| Unit {
                symbol: (*s).to_string(),
                scale: *scale,
            })
    }

    /// Define an ad-hoc unit with scale 1
    pub fn define(symbol: impl Into<String>) -> Unit {
        Unit {
            symbol: symbol.into(),
            scale: 1.0,
        }
    }

    /// The unit symbol, e.g. `"°F"` or `"min"`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Scale relative to the base of this unit's quantity
    ///
    /// For duration units the base is seconds: `min` has scale 60.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Millisecond duration unit
    pub fn ms() -> Unit {
        Unit::duration("ms", 0.001)
    }

    /// Second duration unit
    pub fn sec() -> Unit {
        Unit::duration("sec", 1.0)
    }

    /// Minute duration unit
    pub fn minute() -> Unit {
        Unit::duration("min", 60.0)
    }

    /// Hour duration unit
    pub fn hr() -> Unit {
        Unit::duration("hr", 3600.0)
    }

    /// Day duration unit
    pub fn day() -> Unit {
        Unit::duration("day", 86400.0)
    }

    // Scales here mirror the builtin table entries
    fn duration(symbol: &str, scale: f64) -> Unit {
        Unit {
            symbol: symbol.to_string(),
            scale,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_builtin() {
        let u = Unit::from_symbol("min").unwrap();
        assert_eq!(u.symbol(), "min");
        assert_eq!(u.scale(), 60.0);
    }

    #[test]
    fn test_from_symbol_unknown() {
        assert_eq!(Unit::from_symbol("furlongs"), None);
    }

    #[test]
    fn test_define_adhoc() {
        let u = Unit::define("widgets");
        assert_eq!(u.symbol(), "widgets");
        assert_eq!(u.scale(), 1.0);
    }

    #[test]
    fn test_duration_scales() {
        assert_eq!(Unit::ms().scale(), 0.001);
        assert_eq!(Unit::sec().scale(), 1.0);
        assert_eq!(Unit::minute().scale(), 60.0);
        assert_eq!(Unit::hr().scale(), 3600.0);
        assert_eq!(Unit::day().scale(), 86400.0);
    }

    #[test]
    fn test_equality_by_symbol_and_scale() {
        assert_eq!(Unit::from_symbol("sec"), Some(Unit::sec()));
        assert_ne!(Unit::define("sec"), Unit::minute());
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::from_symbol("°F").unwrap().to_string(), "°F");
    }
}
