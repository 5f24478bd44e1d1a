//! Great-circle distance between two coordinates.

use geopicker_models::Coordinate;

/// Mean earth radius in meters for the spherical approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle surface distance between two points, in meters.
///
/// Haversine on a spherical earth. Symmetric, and zero for identical
/// points. Both inputs are assumed valid; the result is undefined for the
/// invalid sentinel, so callers check `is_valid()` first.
#[must_use]
pub fn great_circle_meters(from: Coordinate, to: Coordinate) -> f64 {
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);

    // rounding can push `a` past 1.0 near antipodes, and asin(>1) is NaN
    EARTH_RADIUS_METERS * 2.0 * a.sqrt().min(1.0).asin()
}

/// Formats a distance in meters as a kilometer label, e.g. `"12.7 km"`.
#[must_use]
pub fn kilometers_label(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}
