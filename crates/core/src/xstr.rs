//! XStr scalar: extended typed string
//!
//! An XStr pairs a type name with an opaque string payload, used for value
//! types outside the closed scalar set (and, historically, as the literal
//! form Bin reuses in the expression encoding).

use crate::text::to_code;
use crate::ValueError;
use serde::{Deserialize, Serialize};

/// An extended typed string: type name plus opaque payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XStr {
    typename: String,
    val: String,
}

impl XStr {
    /// Create an xstr, validating the type name
    ///
    /// Type names start with an uppercase ASCII letter and contain only
    /// ASCII alphanumerics and underscores. The payload is opaque and
    /// unvalidated.
    pub fn new(typename: impl Into<String>, val: impl Into<String>) -> Result<XStr, ValueError> {
        let typename = typename.into();
        let mut chars = typename.chars();
        let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_uppercase());
        if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValueError::InvalidTypeName(typename));
        }
        Ok(XStr {
            typename,
            val: val.into(),
        })
    }

    /// Canonical default: type `XStr`, empty payload
    pub fn def_val() -> XStr {
        XStr {
            typename: "XStr".to_string(),
            val: String::new(),
        }
    }

    /// The type name
    pub fn typename(&self) -> &str {
        &self.typename
    }

    /// The opaque payload
    pub fn val(&self) -> &str {
        &self.val
    }
}

impl std::fmt::Display for XStr {
    /// Displays the grid literal form `Type("payload")`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.typename, to_code(&self.val))
    }
}
