//! Tunable constants for the detour heuristic.
//!
//! The defaults are the values map consumers rely on. Deserialized
//! configs fall back to them for any field that is left out.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Perpendicular offset applied to each waypoint, in degrees (~1 km).
pub const OBSTACLE_BUFFER_DEG: f64 = 0.01;
/// Obstacles closer than this to either endpoint are ignored, in km.
pub const ENDPOINT_CLEARANCE_KM: f64 = 0.1;
/// An obstacle is "in the way" if going through it costs less than
/// this multiple of the direct distance.
pub const CORRIDOR_FACTOR: f64 = 1.5;
/// Cosmetic bend of an unobstructed detour, in degrees.
pub const BEND_OFFSET_DEG: f64 = 0.005;

/// Parameters of [`calculate_detour_route_with`](crate::algorithms::route::calculate_detour_route_with).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetourConfig {
    pub obstacle_buffer_deg: f64,
    pub endpoint_clearance_km: f64,
    pub corridor_factor: f64,
    pub bend_offset_deg: f64,
}

impl Default for DetourConfig {
    fn default() -> Self {
        DetourConfig {
            obstacle_buffer_deg: OBSTACLE_BUFFER_DEG,
            endpoint_clearance_km: ENDPOINT_CLEARANCE_KM,
            corridor_factor: CORRIDOR_FACTOR,
            bend_offset_deg: BEND_OFFSET_DEG,
        }
    }
}

impl DetourConfig {
    /// Checks that every value is finite and usable.
    pub fn validate(&self) -> Result<(), GeoError> {
        let fields = [
            ("obstacle_buffer_deg", self.obstacle_buffer_deg),
            ("endpoint_clearance_km", self.endpoint_clearance_km),
            ("corridor_factor", self.corridor_factor),
            ("bend_offset_deg", self.bend_offset_deg),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                warn!("Rejecting detour config: {} = {}", name, value);
                return Err(GeoError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.corridor_factor < 1.0 {
            warn!(
                "Rejecting detour config: corridor_factor = {}",
                self.corridor_factor
            );
            return Err(GeoError::InvalidConfig(format!(
                "corridor_factor must be at least 1.0, got {}",
                self.corridor_factor
            )));
        }
        Ok(())
    }
}
