//! Direct and detour routes between two points.
//!
//! Both routes are synthetic: the direct route is a straight segment and
//! the detour route is a heuristic bend around obstacles that lie
//! roughly between the endpoints. Neither is checked against a road
//! network or against the actual footprint of an obstacle.

use std::f64::consts::FRAC_PI_2;

use crate::algorithms::proximity::obstacles_excluding;
use crate::config::DetourConfig;
use crate::types::event::HazardEvent;
use crate::types::location::GeoPoint;
use crate::types::route::Route;
use crate::utils::haversine::calculate_distance;

/// Returns the two-point route `[start, end]`.
pub fn calculate_direct_route(start: &GeoPoint, end: &GeoPoint) -> Route {
    Route::new(*start, None, *end)
}

/// Builds a detour route from `start` to `end` that bends around the
/// obstacles lying roughly between them, using the default
/// [`DetourConfig`].
///
/// See [`calculate_detour_route_with`].
pub fn calculate_detour_route(start: &GeoPoint, end: &GeoPoint, obstacles: &[GeoPoint]) -> Route {
    calculate_detour_route_with(start, end, obstacles, &DetourConfig::default())
}

/// Builds a detour route with explicit heuristic constants.
///
/// An obstacle is "nearby" when the path through it is shorter than
/// `corridor_factor` times the direct distance and it is further than
/// `endpoint_clearance_km` from both endpoints.
///
/// * No nearby obstacle: the route is `[start, bend, end]` where `bend`
///   is the midpoint shifted by `bend_offset_deg` on both axes.
/// * Otherwise: one waypoint per nearby obstacle, in input order, offset
///   from the obstacle by `obstacle_buffer_deg` perpendicular to the
///   start-to-end bearing (always to the same side).
///
/// Waypoints are not checked for clearing the obstacle, and obstacles
/// do not influence each other.
pub fn calculate_detour_route_with(
    start: &GeoPoint,
    end: &GeoPoint,
    obstacles: &[GeoPoint],
    config: &DetourConfig,
) -> Route {
    let direct_dist = calculate_distance(start, end);
    let nearby: Vec<&GeoPoint> = obstacles
        .iter()
        .filter(|obstacle| is_nearby(start, end, obstacle, direct_dist, config))
        .collect();
    debug!(
        "Detour: {} of {} obstacles in the way",
        nearby.len(),
        obstacles.len()
    );

    if nearby.is_empty() {
        let bend = GeoPoint::new(
            (start.lat + end.lat) / 2.0 + config.bend_offset_deg,
            (start.lng + end.lng) / 2.0 + config.bend_offset_deg,
        );
        return Route::new(*start, Some(bend), *end);
    }

    let bearing = (end.lat - start.lat).atan2(end.lng - start.lng);
    let perpendicular = bearing + FRAC_PI_2;
    let (sin, cos) = perpendicular.sin_cos();
    let waypoints = nearby.into_iter().map(|obstacle| {
        GeoPoint::new(
            obstacle.lat + config.obstacle_buffer_deg * sin,
            obstacle.lng + config.obstacle_buffer_deg * cos,
        )
    });
    Route::new(*start, waypoints, *end)
}

/// Direct and detour routes from `origin` to a selected event. Every
/// other event counts as an obstacle.
///
/// # Returns
/// A tuple of the direct route and the detour route.
pub fn route_to_event(
    origin: &GeoPoint,
    target: &HazardEvent,
    events: &[HazardEvent],
) -> (Route, Route) {
    let obstacles = obstacles_excluding(events, &target.id);
    (
        calculate_direct_route(origin, &target.location),
        calculate_detour_route(origin, &target.location, &obstacles),
    )
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

/// Ellipse-like "roughly between the endpoints" test.
fn is_nearby(
    start: &GeoPoint,
    end: &GeoPoint,
    obstacle: &GeoPoint,
    direct_dist: f64,
    config: &DetourConfig,
) -> bool {
    let to_start = calculate_distance(start, obstacle);
    let to_end = calculate_distance(end, obstacle);
    let nearby = to_start + to_end < direct_dist * config.corridor_factor
        && to_start > config.endpoint_clearance_km
        && to_end > config.endpoint_clearance_km;
    trace!(
        "Obstacle {:?}: {} km from start, {} km from end, nearby = {}",
        obstacle,
        to_start,
        to_end,
        nearby
    );
    nearby
}
