//! Hazard Routing Library.
//! Distance, route and proximity helpers for hazard-response maps.
//!
//! Every operation is a pure function over [`GeoPoint`]s and borrowed
//! records: nothing is cached, stored or mutated, so all of them are
//! safe to call from anywhere without coordination.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

pub mod types {
    pub mod event;
    pub mod location;
    pub mod risk;
    pub mod route;
}

pub mod utils {
    pub mod fixtures;
    pub mod format;
    pub mod generator;
    pub mod haversine;
}

pub mod algorithms {
    pub mod proximity;
    pub mod route;
}

pub use algorithms::proximity::{obstacles_excluding, sort_events_by_distance, Ranked};
pub use algorithms::route::{
    calculate_detour_route, calculate_detour_route_with, calculate_direct_route, route_to_event,
};
pub use config::DetourConfig;
pub use error::GeoError;
pub use types::event::{HazardEvent, HazardReport};
pub use types::location::{AsGeoPoint, GeoPoint};
pub use types::risk::{get_risk_color, RiskLevel};
pub use types::route::Route;
pub use utils::format::format_distance;
pub use utils::haversine::calculate_distance;
