//! Number scalar: f64 magnitude plus optional unit
//!
//! The textual form uses the grid-literal float tokens `NaN`, `INF` and
//! `-INF` for non-finite magnitudes; whole finite magnitudes print without
//! a decimal point and the unit symbol is appended with no separator
//! (`45°F`, `5min`).

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Duration-unit selection thresholds, in nanosecond ticks
const TICKS_SEC: u64 = 1_000_000_000;
const TICKS_MIN: u64 = 60_000_000_000;
const TICKS_HR: u64 = 3_600_000_000_000;
const TICKS_DAY: u64 = 86_400_000_000_000;

/// A numeric scalar with an optional resolved unit
///
/// Equality follows IEEE-754 float semantics (`NaN != NaN`) and requires
/// the units to match structurally - `Number` never converts between units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    value: f64,
    unit: Option<Unit>,
}

impl Number {
    /// Create a unitless number
    pub fn new(value: f64) -> Number {
        Number { value, unit: None }
    }

    /// Create a number with a resolved unit
    pub fn with_unit(value: f64, unit: Unit) -> Number {
        Number {
            value,
            unit: Some(unit),
        }
    }

    /// Canonical default: zero, unitless
    pub fn def_val() -> Number {
        Number::new(0.0)
    }

    /// Create a duration number from nanosecond ticks, inferring the unit
    ///
    /// The unit is selected by comparing the absolute tick count against
    /// fixed thresholds (1 second, 1 minute, 1 hour, 1 day), so a negative
    /// duration selects the same unit as its positive counterpart:
    ///
    /// ```
    /// use tagval_core::Number;
    ///
    /// assert_eq!(Number::from_ticks(90_000_000_000).to_string(), "1.5min");
    /// assert_eq!(Number::from_ticks(-90_000_000_000).to_string(), "-1.5min");
    /// ```
    pub fn from_ticks(ticks: i64) -> Number {
        let abs = ticks.unsigned_abs();
        let unit = if abs < TICKS_SEC {
            Unit::ms()
        } else if abs < TICKS_MIN {
            Unit::sec()
        } else if abs < TICKS_HR {
            Unit::minute()
        } else if abs < TICKS_DAY {
            Unit::hr()
        } else {
            Unit::day()
        };
        let value = ticks as f64 / 1.0e9 / unit.scale();
        Number {
            value,
            unit: Some(unit),
        }
    }

    /// Create a duration number from an elapsed [`std::time::Duration`]
    ///
    /// Durations beyond the i64 nanosecond range (about 292 years) saturate
    /// rather than wrap; the sign of the result always matches the input.
    pub fn from_duration(dur: std::time::Duration) -> Number {
        let ticks = i64::try_from(dur.as_nanos()).unwrap_or(i64::MAX);
        Number::from_ticks(ticks)
    }

    /// The raw magnitude
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The resolved unit, if any
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// JSON string form: `n:<float>` plus a space-separated unit suffix
    ///
    /// Non-finite magnitudes reuse the grid float tokens: `n:NaN`,
    /// `n:INF`, `n:-INF`.
    pub fn to_json(&self) -> String {
        let token = float_token(self.value);
        match (&self.unit, self.value.is_finite()) {
            (Some(u), true) => format!("n:{} {}", token, u.symbol()),
            _ => format!("n:{}", token),
        }
    }

    /// Locale-aware display form, optionally driven by a format pattern
    ///
    /// The pattern grammar is the `#,##0.0#` family: a comma in the integer
    /// part enables thousands grouping, `0`s after the decimal point are
    /// forced fraction digits, `#`s are optional ones. With no pattern the
    /// magnitude is grouped and rounded to at most four fraction digits.
    pub fn to_locale(&self, pattern: Option<&str>) -> String {
        if !self.value.is_finite() {
            return float_token(self.value);
        }
        let body = match pattern {
            None => format_decimal(self.value, true, 0, 4),
            Some(p) => {
                let (group, min, max) = parse_pattern(p);
                format_decimal(self.value, group, min, max)
            }
        };
        match &self.unit {
            Some(u) => format!("{}{}", body, u.symbol()),
            None => body,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", float_token(self.value))?;
        if self.value.is_finite() {
            if let Some(u) = &self.unit {
                write!(f, "{}", u.symbol())?;
            }
        }
        Ok(())
    }
}

/// Format a magnitude as a grid float token
///
/// Whole magnitudes inside the exact-integer f64 range print without a
/// decimal point.
fn float_token(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v == f64::INFINITY {
        return "INF".to_string();
    }
    if v == f64::NEG_INFINITY {
        return "-INF".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 9.007_199_254_740_992e15 {
        return format!("{}", v as i64);
    }
    v.to_string()
}

/// Extract (grouping, min fraction digits, max fraction digits) from a
/// `#,##0.0#`-style pattern
fn parse_pattern(pattern: &str) -> (bool, usize, usize) {
    let (int_part, frac_part) = match pattern.split_once('.') {
        Some((i, f)) => (i, f),
        None => (pattern, ""),
    };
    let group = int_part.contains(',');
    let min = frac_part.chars().filter(|c| *c == '0').count();
    let max = frac_part
        .chars()
        .filter(|c| *c == '0' || *c == '#')
        .count();
    (group, min, max)
}

fn format_decimal(v: f64, group: bool, min_frac: usize, max_frac: usize) -> String {
    let rounded = format!("{:.*}", max_frac, v.abs());
    let (int_s, frac_s) = match rounded.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rounded.as_str(), ""),
    };

    // Trim optional trailing zeros down to the forced digit count
    let mut frac = frac_s.to_string();
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let int_out = if group {
        group_thousands(int_s)
    } else {
        int_s.to_string()
    };

    // Sign comes from the rounded digits, not the raw value, so a magnitude
    // that rounds away entirely never renders as "-0"
    let nonzero = int_s.bytes().any(|b| b != b'0') || frac.bytes().any(|b| b != b'0');
    let sign = if v < 0.0 && nonzero { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, int_out)
    } else {
        format!("{}{}.{}", sign, int_out, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
