//! Ref scalar: record identifier plus optional display string
//!
//! Identifier validation happens here, at construction - the codec layer
//! never escapes ref ids, so an id must only contain characters legal in
//! the `@`-prefixed reference syntax.

use crate::text::to_code;
use crate::ValueError;
use serde::{Deserialize, Serialize};

/// A reference to another record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    id: String,
    dis: Option<String>,
}

impl Ref {
    /// Create a ref from an identifier
    ///
    /// The id must be non-empty and contain only ASCII alphanumerics or
    /// `_ : - . ~`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagval_core::Ref;
    ///
    /// let r = Ref::new("site-1").unwrap();
    /// assert_eq!(r.to_code(), "@site-1");
    /// assert!(Ref::new("bad id").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Ref, ValueError> {
        let id = id.into();
        if id.is_empty() || !id.chars().all(is_id_char) {
            return Err(ValueError::InvalidRefId(id));
        }
        Ok(Ref { id, dis: None })
    }

    /// Create a ref with a display string
    pub fn with_dis(id: impl Into<String>, dis: impl Into<String>) -> Result<Ref, ValueError> {
        let mut r = Ref::new(id)?;
        r.dis = Some(dis.into());
        Ok(r)
    }

    /// Canonical default: the null ref
    pub fn def_val() -> Ref {
        Ref {
            id: "null".to_string(),
            dis: None,
        }
    }

    /// The bare identifier, without the `@` prefix
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display string for this ref: the dis if present, else the id
    pub fn dis(&self) -> &str {
        self.dis.as_deref().unwrap_or(&self.id)
    }

    /// Code form: `@id`, never carries the display string
    pub fn to_code(&self) -> String {
        format!("@{}", self.id)
    }

    /// Grid literal form: `@id` plus a quoted display suffix when present
    pub fn to_zinc(&self) -> String {
        match &self.dis {
            Some(dis) => format!("@{} {}", self.id, to_code(dis)),
            None => format!("@{}", self.id),
        }
    }

    /// JSON string form: `r:id` plus a raw display suffix when present
    pub fn to_json(&self) -> String {
        match &self.dis {
            Some(dis) => format!("r:{} {}", self.id, dis),
            None => format!("r:{}", self.id),
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-' | '.' | '~')
}

impl std::fmt::Display for Ref {
    /// Displays the code form `@id`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.id)
    }
}
