#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Place and coordinate types shared across the geopicker crates.
//!
//! A [`Place`] is a single geocoding result: an address broken into its
//! component fields plus an optional resolved coordinate. A [`Coordinate`]
//! is a WGS84 latitude/longitude pair with a reserved sentinel value for
//! "no coordinate yet".

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Sentinel for "invalid / not yet known".
    ///
    /// Distinct from every real position: latitude can never reach -180.
    pub const INVALID: Self = Self {
        latitude: -180.0,
        longitude: -180.0,
    };

    /// Creates a coordinate from degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this coordinate describes a real point on the globe.
    ///
    /// True when latitude is within ±90°, longitude within ±180°, and the
    /// value is not the [`Coordinate::INVALID`] sentinel.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A geocoding result: an address and/or a resolved coordinate.
///
/// Every field is optional; a reverse lookup over open water may produce
/// nothing but a coordinate, and a coarse forward lookup may resolve only
/// a city and country. Immutable once produced by a gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Point-of-interest or common name (e.g. "Golden Gate Bridge").
    pub name: Option<String>,
    /// Street name (e.g. "Market Street").
    pub street: Option<String>,
    /// Street-level detail such as a house number (e.g. "1455").
    pub sub_street: Option<String>,
    /// City (e.g. "San Francisco").
    pub city: Option<String>,
    /// Neighborhood or district within the city.
    pub sub_city: Option<String>,
    /// State or province (e.g. "CA").
    pub region: Option<String>,
    /// County or other subdivision below the region.
    pub sub_region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g. "US").
    pub iso_country_code: Option<String>,
    /// Resolved position, when the gateway produced one.
    pub coordinate: Option<Coordinate>,
}

impl Place {
    /// Returns every address field as an ordered `(label, value)` pair.
    ///
    /// Absent fields render as `"-"` so a detail screen can show a fixed
    /// set of rows. Field order matches the struct declaration.
    #[must_use]
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let row = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        vec![
            ("name", row(&self.name)),
            ("street", row(&self.street)),
            ("sub_street", row(&self.sub_street)),
            ("city", row(&self.city)),
            ("sub_city", row(&self.sub_city)),
            ("region", row(&self.region)),
            ("sub_region", row(&self.sub_region)),
            ("postal_code", row(&self.postal_code)),
            ("country", row(&self.country)),
            ("iso_country_code", row(&self.iso_country_code)),
        ]
    }
}
