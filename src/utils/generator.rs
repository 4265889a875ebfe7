//! Random point generation, mostly useful for exercising the distance
//! and sorting helpers with many inputs.

use rand::Rng;

use crate::types::location::GeoPoint;

/// Approximate length of one degree of latitude in kilometers.
const KM_PER_DEGREE: f64 = 111.2;

/// Generates `capacity` random points within roughly `radius_km` of
/// `center`.
///
/// The offsets are drawn uniformly in a lat/lng box, so the result is
/// not a true circle. Points are clamped to valid coordinate ranges.
pub fn generate_points_near(center: &GeoPoint, radius_km: f64, capacity: usize) -> Vec<GeoPoint> {
    let mut rng = rand::thread_rng();
    let lat_span = (radius_km / KM_PER_DEGREE).abs();
    let lng_span = (lat_span / center.lat.to_radians().cos().abs().max(0.01)).min(180.0);

    let mut points = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        let lat = center.lat + rng.gen_range(-lat_span..=lat_span);
        let lng = center.lng + rng.gen_range(-lng_span..=lng_span);
        points.push(GeoPoint::new(
            lat.clamp(-90.0, 90.0),
            lng.clamp(-180.0, 180.0),
        ));
    }
    points
}
