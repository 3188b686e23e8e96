//! Shared string-literal quoting
//!
//! Several textual forms embed a string as a double-quoted literal:
//! `Bin("text/plain")`, `xstr("Type", "payload")`, the display suffix of a
//! zinc ref. They all use the same escaping rules, implemented once here.

/// Quote a string as a double-quoted literal with escapes
///
/// Escapes quote, backslash, and the common control characters; any other
/// non-printable ASCII becomes a `\uXXXX` sequence.
///
/// # Examples
///
/// ```
/// use tagval_core::text::to_code;
///
/// assert_eq!(to_code("text/plain"), "\"text/plain\"");
/// assert_eq!(to_code("a\"b"), "\"a\\\"b\"");
/// ```
pub fn to_code(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
