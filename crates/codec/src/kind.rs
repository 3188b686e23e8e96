//! Kind descriptors and the process-wide registry
//!
//! One [`Kind`] exists per scalar variant. Base kinds are `'static`
//! singletons published through a once-initialized, read-only registry;
//! tag-specialized ref kinds are derived values that live outside the
//! registry. Everything here is immutable after construction, so kinds and
//! the registry are freely shared across threads.

use crate::{axon, json, zinc, CodecError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tagval_core::{Bin, Coord, Number, Ref, Scalar, XStr};

/// The five scalar variant families
///
/// This enum is closed: every codec matches exhaustively over it, and the
/// registry contains exactly one base kind per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindFamily {
    /// Numeric magnitude with optional unit
    Number,
    /// Reference to another record
    Ref,
    /// Geographic coordinate
    Coord,
    /// Binary blob descriptor
    Bin,
    /// Extended typed string
    XStr,
}

impl KindFamily {
    /// All families (for iteration)
    pub const ALL: [KindFamily; 5] = [
        KindFamily::Number,
        KindFamily::Ref,
        KindFamily::Coord,
        KindFamily::Bin,
        KindFamily::XStr,
    ];

    /// The stable canonical name for this family
    pub const fn name(&self) -> &'static str {
        match self {
            KindFamily::Number => "Number",
            KindFamily::Ref => "Ref",
            KindFamily::Coord => "Coord",
            KindFamily::Bin => "Bin",
            KindFamily::XStr => "XStr",
        }
    }
}

/// Format selector for [`Kind::encode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Compact grid literal form
    Zinc,
    /// Prefix-tagged JSON string form
    Json,
    /// Expression-language literal form
    Axon,
}

/// Descriptor for one scalar variant
///
/// A kind's `name` is stable for its family regardless of specialization;
/// only the display name changes when a ref kind carries a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    family: KindFamily,
    tag: Option<String>,
}

static NUMBER: Kind = Kind::base(KindFamily::Number);
static REF: Kind = Kind::base(KindFamily::Ref);
static COORD: Kind = Kind::base(KindFamily::Coord);
static BIN: Kind = Kind::base(KindFamily::Bin);
static XSTR: Kind = Kind::base(KindFamily::XStr);

/// Name -> base kind lookup, populated once and read-only thereafter
static REGISTRY: Lazy<HashMap<&'static str, &'static Kind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for kind in [&NUMBER, &REF, &COORD, &BIN, &XSTR] {
        map.insert(kind.name(), kind);
    }
    map
});

impl Kind {
    const fn base(family: KindFamily) -> Kind {
        Kind { family, tag: None }
    }

    /// Resolve the base kind singleton for a canonical name
    ///
    /// Returns `None` for unregistered names - the caller decides how
    /// severe an unknown kind is.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagval_codec::Kind;
    ///
    /// assert_eq!(Kind::for_name("Number").unwrap().name(), "Number");
    /// assert!(Kind::for_name("Widget").is_none());
    /// ```
    pub fn for_name(name: &str) -> Option<&'static Kind> {
        REGISTRY.get(name).copied()
    }

    /// Resolve the base kind for a value's runtime variant
    pub fn of(val: &Scalar) -> &'static Kind {
        match val {
            Scalar::Number(_) => &NUMBER,
            Scalar::Ref(_) => &REF,
            Scalar::Coord(_) => &COORD,
            Scalar::Bin(_) => &BIN,
            Scalar::XStr(_) => &XSTR,
        }
    }

    /// The variant family this kind describes
    pub fn family(&self) -> KindFamily {
        self.family
    }

    /// Stable canonical name, e.g. `"Ref"` even for a tagged ref kind
    pub fn name(&self) -> &'static str {
        self.family.name()
    }

    /// Display name: the canonical name, or `Ref<tag>` when specialized
    pub fn display_name(&self) -> String {
        match &self.tag {
            Some(tag) => format!("Ref<{}>", tag),
            None => self.name().to_string(),
        }
    }

    /// The specialization tag, present only on a tagged ref kind
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// True for the Number kind
    pub fn is_number(&self) -> bool {
        self.family == KindFamily::Number
    }

    /// True for the Ref kind, tagged or not
    pub fn is_ref(&self) -> bool {
        self.family == KindFamily::Ref
    }

    /// True for the XStr kind and for Bin
    ///
    /// Bin answers true because it reuses the xstr literal form in the
    /// expression encoding; callers using this predicate get both.
    pub fn is_xstr(&self) -> bool {
        matches!(self.family, KindFamily::XStr | KindFamily::Bin)
    }

    /// Canonical default value for this kind's variant
    ///
    /// Every family delegates to its variant's own default constant, so
    /// this succeeds for the entire closed set - including variants whose
    /// primary constructors require arguments.
    pub fn def_val(&self) -> Scalar {
        match self.family {
            KindFamily::Number => Scalar::Number(Number::def_val()),
            KindFamily::Ref => Scalar::Ref(Ref::def_val()),
            KindFamily::Coord => Scalar::Coord(Coord::def_val()),
            KindFamily::Bin => Scalar::Bin(Bin::def_val()),
            KindFamily::XStr => Scalar::XStr(XStr::def_val()),
        }
    }

    /// Derive a ref kind specialized to records of the given tag
    ///
    /// Returns a new independent kind with `tag` set and display name
    /// `Ref<tag>`; the receiver is unmodified. `None` for non-ref kinds -
    /// specialization is only defined for refs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagval_codec::Kind;
    ///
    /// let base = Kind::for_name("Ref").unwrap();
    /// let site = base.to_tag_of("siteRef").unwrap();
    /// assert_eq!(site.display_name(), "Ref<siteRef>");
    /// assert_eq!(site.tag(), Some("siteRef"));
    /// assert_eq!(base.tag(), None);
    /// ```
    pub fn to_tag_of(&self, tag: impl Into<String>) -> Option<Kind> {
        if self.family != KindFamily::Ref {
            return None;
        }
        Some(Kind {
            family: KindFamily::Ref,
            tag: Some(tag.into()),
        })
    }

    /// Encode a value in the requested format, checking the variant first
    pub fn encode(&self, val: &Scalar, format: Format) -> Result<String, CodecError> {
        self.check(val)?;
        Ok(match format {
            Format::Zinc => zinc::encode_zinc(val),
            Format::Json => json::encode_json(val),
            Format::Axon => axon::encode_axon(val),
        })
    }

    /// Encode the grid literal form, checking the variant first
    pub fn to_zinc(&self, val: &Scalar) -> Result<String, CodecError> {
        self.encode(val, Format::Zinc)
    }

    /// Encode the JSON string form, checking the variant first
    pub fn to_json(&self, val: &Scalar) -> Result<String, CodecError> {
        self.encode(val, Format::Json)
    }

    /// Encode the expression literal form, checking the variant first
    pub fn to_axon(&self, val: &Scalar) -> Result<String, CodecError> {
        self.encode(val, Format::Axon)
    }

    /// Human display string for a value
    ///
    /// Numbers delegate to their locale formatting, driven by an optional
    /// pattern (callers typically pass the record's `format` metadata);
    /// refs display their dis; the rest use their literal form.
    pub fn val_to_dis(&self, val: &Scalar, pattern: Option<&str>) -> Result<String, CodecError> {
        self.check(val)?;
        Ok(match val {
            Scalar::Number(n) => n.to_locale(pattern),
            Scalar::Ref(r) => r.dis().to_string(),
            Scalar::Coord(c) => c.to_string(),
            Scalar::Bin(b) => b.to_string(),
            Scalar::XStr(x) => x.to_string(),
        })
    }

    fn check(&self, val: &Scalar) -> Result<(), CodecError> {
        if Kind::of(val).family != self.family {
            return Err(CodecError::TypeMismatch {
                expected: self.name(),
                actual: val.type_name(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Kind {
    /// Displays the display name (`Number`, `Ref<siteRef>`, ...)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Registry =====

    #[test]
    fn test_for_name_resolves_all_families() {
        for family in KindFamily::ALL {
            let kind = Kind::for_name(family.name()).unwrap();
            assert_eq!(kind.family(), family);
            assert_eq!(kind.tag(), None);
        }
    }

    #[test]
    fn test_for_name_unknown_is_none() {
        assert!(Kind::for_name("Grid").is_none());
        assert!(Kind::for_name("number").is_none(), "lookup is case-sensitive");
        assert!(Kind::for_name("").is_none());
    }

    #[test]
    fn test_of_matches_variant() {
        let val = Scalar::from(Bin::def_val());
        assert_eq!(Kind::of(&val).name(), "Bin");
    }

    // ===== Classification =====

    #[test]
    fn test_classification_predicates() {
        let number = Kind::for_name("Number").unwrap();
        assert!(number.is_number());
        assert!(!number.is_ref());
        assert!(!number.is_xstr());

        let r = Kind::for_name("Ref").unwrap();
        assert!(r.is_ref());
        assert!(!r.is_number());

        let x = Kind::for_name("XStr").unwrap();
        assert!(x.is_xstr());

        let coord = Kind::for_name("Coord").unwrap();
        assert!(!coord.is_number() && !coord.is_ref() && !coord.is_xstr());
    }

    #[test]
    fn test_bin_classifies_as_xstr() {
        // Bin shares the xstr literal family
        let bin = Kind::for_name("Bin").unwrap();
        assert!(bin.is_xstr());
        assert!(!bin.is_number());
    }

    // ===== Defaults =====

    #[test]
    fn test_def_val_every_family() {
        for family in KindFamily::ALL {
            let kind = Kind::for_name(family.name()).unwrap();
            let def = kind.def_val();
            assert_eq!(
                Kind::of(&def).family(),
                family,
                "default for {} must classify under its own kind",
                family.name()
            );
        }
    }

    #[test]
    fn test_def_val_canonical_instances() {
        assert_eq!(
            Kind::for_name("Ref").unwrap().def_val(),
            Scalar::from(Ref::def_val())
        );
        assert_eq!(
            Kind::for_name("Bin").unwrap().def_val(),
            Scalar::from(Bin::new("text/plain"))
        );
    }

    // ===== Tag specialization =====

    #[test]
    fn test_to_tag_of_derives_display_name() {
        let base = Kind::for_name("Ref").unwrap();
        let site = base.to_tag_of("siteRef").unwrap();
        assert_eq!(site.name(), "Ref", "canonical name is stable");
        assert_eq!(site.display_name(), "Ref<siteRef>");
        assert_eq!(site.tag(), Some("siteRef"));
    }

    #[test]
    fn test_to_tag_of_leaves_base_unmodified() {
        let base = Kind::for_name("Ref").unwrap();
        let _ = base.to_tag_of("siteRef").unwrap();
        assert_eq!(base.tag(), None);
        assert_eq!(base.display_name(), "Ref");
    }

    #[test]
    fn test_to_tag_of_twice_is_independent() {
        let base = Kind::for_name("Ref").unwrap();
        let site = base.to_tag_of("siteRef").unwrap();
        let equip = base.to_tag_of("equipRef").unwrap();
        assert_ne!(site, equip);
        assert_eq!(site.tag(), Some("siteRef"));
        assert_eq!(equip.tag(), Some("equipRef"));
    }

    #[test]
    fn test_to_tag_of_non_ref_is_none() {
        assert!(Kind::for_name("Number").unwrap().to_tag_of("siteRef").is_none());
        assert!(Kind::for_name("Bin").unwrap().to_tag_of("siteRef").is_none());
    }

    #[test]
    fn test_tagged_kind_still_encodes() {
        let site = Kind::for_name("Ref").unwrap().to_tag_of("siteRef").unwrap();
        let val = Scalar::from(Ref::new("s1").unwrap());
        assert_eq!(site.to_zinc(&val).unwrap(), "@s1");
        assert!(site.is_ref());
    }

    // ===== Type mismatch =====

    #[test]
    fn test_encode_mismatch_every_format() {
        let number = Kind::for_name("Number").unwrap();
        let val = Scalar::from(Bin::def_val());
        for format in [Format::Zinc, Format::Json, Format::Axon] {
            assert_eq!(
                number.encode(&val, format),
                Err(CodecError::TypeMismatch {
                    expected: "Number",
                    actual: "Bin",
                })
            );
        }
    }

    #[test]
    fn test_val_to_dis_mismatch() {
        let coord = Kind::for_name("Coord").unwrap();
        let val = Scalar::from(Number::new(1.0));
        assert!(coord.val_to_dis(&val, None).is_err());
    }

    // ===== Display strings =====

    #[test]
    fn test_val_to_dis_number_pattern() {
        let kind = Kind::for_name("Number").unwrap();
        let val = Scalar::from(Number::new(1234.5));
        assert_eq!(kind.val_to_dis(&val, Some("#,##0.00")).unwrap(), "1,234.50");
    }

    #[test]
    fn test_val_to_dis_ref_uses_dis() {
        let kind = Kind::for_name("Ref").unwrap();
        let val = Scalar::from(Ref::with_dis("site-1", "Building 1").unwrap());
        assert_eq!(kind.val_to_dis(&val, None).unwrap(), "Building 1");
    }

    #[test]
    fn test_kind_display_is_display_name() {
        let base = Kind::for_name("Ref").unwrap();
        assert_eq!(base.to_string(), "Ref");
        assert_eq!(base.to_tag_of("siteRef").unwrap().to_string(), "Ref<siteRef>");
    }
}
