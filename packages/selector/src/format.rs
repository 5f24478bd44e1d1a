//! Display formatting for places and coordinates.
//!
//! Pure string builders shared by every picker screen: a fixed
//! mailing-address layout and the `φ/λ` coordinate label.

use geopicker_models::{Coordinate, Place};

/// Formats a place as a multi-line mailing address.
///
/// Layout: street on its own line, then city / region / postal code on
/// one line, then country. Absent fields contribute nothing, never an
/// empty line, so a place with only a city yields that single line and a
/// fully empty place yields an empty string.
#[must_use]
pub fn postal_address(place: &Place) -> String {
    let mut lines: Vec<String> = Vec::new();

    let street = join_present(&[&place.sub_street, &place.street]);
    if !street.is_empty() {
        lines.push(street);
    }

    let locality = join_present(&[&place.city, &place.region, &place.postal_code]);
    if !locality.is_empty() {
        lines.push(locality);
    }

    if let Some(country) = &place.country {
        if !country.is_empty() {
            lines.push(country.clone());
        }
    }

    lines.join("\n")
}

/// Formats a coordinate as `φ:<lat>, λ:<lon>` with four decimal places.
///
/// Purely numeric: the invalid sentinel is rendered like any other value,
/// callers substitute their own placeholder for invalid coordinates.
#[must_use]
pub fn coordinate_label(coordinate: Coordinate) -> String {
    format!(
        "\u{3c6}:{:.4}, \u{3bb}:{:.4}",
        coordinate.latitude, coordinate.longitude
    )
}

/// Joins the non-empty fields with single spaces.
fn join_present(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|field| field.as_deref())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
