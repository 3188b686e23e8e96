//! Coord scalar: geographic latitude/longitude pair

use crate::ValueError;
use serde::{Deserialize, Serialize};

/// A geographic coordinate
///
/// Latitude is restricted to -90..90 and longitude to -180..180, checked
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    lat: f64,
    lng: f64,
}

impl Coord {
    /// Create a coordinate, validating both components
    ///
    /// # Examples
    ///
    /// ```
    /// use tagval_core::Coord;
    ///
    /// let c = Coord::new(37.7749, -122.4194).unwrap();
    /// assert_eq!(c.to_string(), "C(37.7749,-122.4194)");
    /// assert!(Coord::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lng: f64) -> Result<Coord, ValueError> {
        if !(-90.0..=90.0).contains(&lat) || lat.is_nan() {
            return Err(ValueError::LatitudeRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) || lng.is_nan() {
            return Err(ValueError::LongitudeRange(lng));
        }
        Ok(Coord { lat, lng })
    }

    /// Canonical default: the origin
    pub fn def_val() -> Coord {
        Coord { lat: 0.0, lng: 0.0 }
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Canonical `lat,lng` decimal pair, shared by the JSON and axon forms
    pub fn to_lat_lng_str(&self) -> String {
        format!("{},{}", degrees(self.lat), degrees(self.lng))
    }
}

/// Format one component, ensuring a decimal point for whole degrees
///
/// The `lat,lng` string is the canonical cross-format form, so components
/// must always render in fixed notation. Float `Display` is positional
/// (exponent form only comes from the `{:e}` formatter), so even a
/// sub-microdegree component like 1e-7 prints as `0.0000001`.
fn degrees(v: f64) -> String {
    let s = v.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}

impl std::fmt::Display for Coord {
    /// Displays the grid literal form `C(lat,lng)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({})", self.to_lat_lng_str())
    }
}
