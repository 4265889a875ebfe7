//! Struct definitions and implementations for [`GeoPoint`].
//!
//! Anything that sits somewhere on the map can implement [`AsGeoPoint`]
//! so that distance sorting and obstacle selection stay agnostic of the
//! record type they work on.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A [`GeoPoint`] is a latitude/longitude pair in decimal degrees.
///
/// It is a plain value type with no identity beyond its coordinates.
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// only [`GeoPoint::try_new`] checks that.
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The latitude in decimal degrees.
    pub lat: f64,

    /// The longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point without validating the coordinates.
    pub const fn new(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    /// Creates a point, rejecting coordinates that are out of range or
    /// not finite.
    pub fn try_new(lat: f64, lng: f64) -> Result<GeoPoint, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidLongitude(lng));
        }
        Ok(GeoPoint { lat, lng })
    }

    /// Returns the coordinate in `[lng, lat]` order, which is what
    /// GeoJSON line strings expect.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Since Rust doesn't allow for inheritance, this trait lets "point-like"
/// records be passed to functions that only need a position.
pub trait AsGeoPoint {
    /// Returns the position of the object.
    fn as_geo_point(&self) -> GeoPoint;
}

impl AsGeoPoint for GeoPoint {
    fn as_geo_point(&self) -> GeoPoint {
        *self
    }
}

impl<T: AsGeoPoint + ?Sized> AsGeoPoint for &T {
    fn as_geo_point(&self) -> GeoPoint {
        (**self).as_geo_point()
    }
}
