//! Definition of the [`Route`] type.
//!
//! A route is a synthetic, ordered sequence of coordinates meant to be
//! drawn as a connected line. It is not checked against any road
//! network.

use serde::Serialize;

use super::location::GeoPoint;
use crate::utils::haversine::calculate_distance;

/// An ordered path from an origin to a destination.
///
/// Always holds at least two points. The first point is the exact
/// origin and the last point is the exact destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<GeoPoint>,
}

impl Route {
    /// Builds a route from an origin, the intermediate waypoints and a
    /// destination.
    pub(crate) fn new(
        origin: GeoPoint,
        waypoints: impl IntoIterator<Item = GeoPoint>,
        destination: GeoPoint,
    ) -> Route {
        let mut points = vec![origin];
        points.extend(waypoints);
        points.push(destination);
        Route { points }
    }

    /// All points in order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// The first point.
    pub fn origin(&self) -> &GeoPoint {
        &self.points[0]
    }

    /// The last point.
    pub fn destination(&self) -> &GeoPoint {
        &self.points[self.points.len() - 1]
    }

    /// The points between origin and destination.
    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.points[1..self.points.len() - 1]
    }

    /// Number of points, origin and destination included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Coordinates in `[lng, lat]` order for a GeoJSON `LineString`.
    pub fn to_lng_lat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::to_lng_lat).collect()
    }

    /// Sum of the leg distances in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|leg| calculate_distance(&leg[0], &leg[1]))
            .sum()
    }
}

impl From<Route> for Vec<GeoPoint> {
    fn from(route: Route) -> Self {
        route.points
    }
}
