//! Bin scalar: MIME type for an external binary payload
//!
//! Only the MIME type is modeled here - payload bytes are external I/O
//! handled by other layers.

use crate::text::to_code;
use serde::{Deserialize, Serialize};

/// A binary blob descriptor, carrying just the MIME type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bin {
    mime: String,
}

impl Bin {
    /// Create a bin from a MIME type
    pub fn new(mime: impl Into<String>) -> Bin {
        Bin { mime: mime.into() }
    }

    /// Canonical default: `text/plain`
    pub fn def_val() -> Bin {
        Bin::new("text/plain")
    }

    /// The MIME type string
    pub fn mime(&self) -> &str {
        &self.mime
    }
}

impl std::fmt::Display for Bin {
    /// Displays the grid literal form `Bin("mime")`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bin({})", to_code(&self.mime))
    }
}
