//! Great-circle distance between two [`GeoPoint`]s.

use crate::types::location::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two points in kilometers,
/// rounded to 2 decimal places.
///
/// Every finite input is accepted, including identical and antipodal
/// points.
///
/// # Arguments
/// * `a` - The first point.
/// * `b` - The second point.
///
/// # Returns
/// The distance in kilometers.
pub fn calculate_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // rounding error can push h just past 1 for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_to_hundredths(EARTH_RADIUS_KM * central_angle)
}

/// Rounds half away from zero to 2 decimal places.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
