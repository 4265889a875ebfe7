//! Struct definitions for hazard events and user-submitted reports.
//!
//! A [`HazardEvent`] is owned by the caller. The routing helpers only
//! read its position, identity and risk level through [`AsGeoPoint`]
//! and never mutate it.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::location::{AsGeoPoint, GeoPoint};
use super::risk::RiskLevel;

/// A reported hazard shown on the map and in the event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardEvent {
    /// Stable identifier. Seed data uses short numeric strings, new
    /// reports get a UUID.
    pub id: String,

    pub title: String,

    pub description: String,

    pub risk_level: RiskLevel,

    /// Where the hazard is.
    pub location: GeoPoint,

    /// Who reported the hazard, e.g. "Fire Department".
    pub reported_by: String,

    pub reported_at: NaiveDateTime,
}

impl AsGeoPoint for HazardEvent {
    fn as_geo_point(&self) -> GeoPoint {
        self.location
    }
}

/// A new hazard submitted by a user, before it has an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardReport {
    pub title: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub location: GeoPoint,
    pub reported_by: String,
}

impl HazardReport {
    /// Turns the report into an event with a fresh id, stamped with the
    /// current UTC time.
    pub fn into_event(self) -> HazardEvent {
        self.into_event_at(Utc::now().naive_utc())
    }

    /// Same as [`HazardReport::into_event`] with an explicit timestamp.
    pub fn into_event_at(self, reported_at: NaiveDateTime) -> HazardEvent {
        let id = Uuid::new_v4().to_string();
        debug!("New hazard report {} at {:?}", id, self.location);
        HazardEvent {
            id,
            title: self.title,
            description: self.description,
            risk_level: self.risk_level,
            location: self.location,
            reported_by: self.reported_by,
            reported_at,
        }
    }
}
