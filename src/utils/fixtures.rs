//! Demo seed data around Jasper, Alberta.
//!
//! The events are built once on first access and shared afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::types::event::HazardEvent;
use crate::types::location::GeoPoint;
use crate::types::risk::RiskLevel;

/// Center of the Jasper townsite.
pub const JASPER_CENTER: GeoPoint = GeoPoint::new(52.8734, -118.0814);

/// Fixed user position used by the demo.
pub const USER_LOCATION: GeoPoint = GeoPoint::new(52.875, -118.075);

/// The seventeen demo events, in their canonical order.
pub static MOCK_EVENTS: Lazy<Vec<HazardEvent>> = Lazy::new(|| {
    vec![
        seed(
            "1",
            "Downed Power Lines - Highway 16",
            "Multiple power lines down across Highway 16 East. Exposed high-voltage cables pose immediate danger. Area cordoned off pending utility crew arrival.",
            RiskLevel::High,
            GeoPoint::new(52.882, -118.065),
            "Fire Department",
            (10, 30),
        ),
        seed(
            "2",
            "Tree Blocking Connaught Drive",
            "Large fallen tree blocking both lanes of Connaught Drive near the train station. Vehicle access restricted but path can be cleared by volunteers.",
            RiskLevel::Low,
            GeoPoint::new(52.8765, -118.082),
            "Local Resident",
            (11, 15),
        ),
        seed(
            "3",
            "Gas Leak - Patricia Street",
            "Strong gas odor reported near Patricia Street and Hazel Avenue. Potential gas line rupture. Evacuation of nearby buildings recommended.",
            RiskLevel::High,
            GeoPoint::new(52.87, -118.078),
            "Fire Department",
            (9, 45),
        ),
        seed(
            "4",
            "Debris on Pyramid Lake Road",
            "Storm debris and fallen branches blocking Pyramid Lake Road. Safe for volunteer cleanup crews to clear roadway.",
            RiskLevel::Low,
            GeoPoint::new(52.895, -118.09),
            "Park Ranger",
            (12, 0),
        ),
        seed(
            "5",
            "Road Washout - Maligne Lake Road",
            "Severe flooding has washed out section of Maligne Lake Road near kilometer 15. Deep water and unstable ground. Road impassable.",
            RiskLevel::Low,
            GeoPoint::new(52.86, -118.05),
            "Transportation Dept",
            (8, 20),
        ),
        seed(
            "6",
            "Structural Damage - Jasper Community Center",
            "Partial roof collapse at community center. Unstable structure with potential for further collapse. Entry restricted to structural engineers only.",
            RiskLevel::High,
            GeoPoint::new(52.874, -118.085),
            "Building Inspector",
            (7, 30),
        ),
        seed(
            "7",
            "Blocked Trail - Valley of Five Lakes",
            "Mudslide has blocked hiking trail to Valley of Five Lakes. Trail needs clearing but poses no immediate danger. Suitable for volunteer work parties.",
            RiskLevel::Low,
            GeoPoint::new(52.91, -118.12),
            "Trail Maintenance",
            (13, 45),
        ),
        seed(
            "8",
            "Power Terminal Alpha - System Failure",
            "Main power distribution terminal experiencing cascading failures. Critical infrastructure requiring immediate technician assessment for electrical hazards.",
            RiskLevel::TechnicianOnly,
            GeoPoint::new(52.868, -118.095),
            "Utility Company",
            (6, 0),
        ),
        seed(
            "9",
            "Substation Bravo - Transformer Fire Risk",
            "Electrical substation showing signs of overheating. High voltage equipment at risk of fire. Technician monitoring required.",
            RiskLevel::TechnicianOnly,
            GeoPoint::new(52.885, -118.07),
            "Power Grid Operator",
            (5, 30),
        ),
        seed(
            "10",
            "Emergency Generator Station - Fuel Leak",
            "Backup power facility has developed fuel leak near electrical systems. Potential fire hazard requiring technician containment.",
            RiskLevel::TechnicianOnly,
            GeoPoint::new(52.878, -118.088),
            "Facility Manager",
            (8, 0),
        ),
        seed(
            "11",
            "Bridge Collapse - Hazel Avenue",
            "Small pedestrian bridge has collapsed blocking the most direct route. Vehicles must detour around. High priority repair needed.",
            RiskLevel::High,
            GeoPoint::new(52.8725, -118.077),
            "Public Works",
            (6, 45),
        ),
        seed(
            "12",
            "Sinkhole - Geikie Street",
            "Large sinkhole opened up in the middle of Geikie Street. Road completely impassable. Emergency crews establishing detour routes.",
            RiskLevel::High,
            GeoPoint::new(52.8755, -118.08),
            "Emergency Services",
            (7, 15),
        ),
        seed(
            "13",
            "Fallen Utility Pole - Turret Street",
            "Utility pole down across Turret Street with live wires. Complete road closure in effect. Alternate routes available for volunteers.",
            RiskLevel::Low,
            GeoPoint::new(52.877, -118.084),
            "Utility Crew",
            (10, 0),
        ),
        seed(
            "14",
            "Landslide - Cabin Creek Road",
            "Major landslide has covered both lanes of Cabin Creek Road with debris. Route completely blocked requiring significant detour.",
            RiskLevel::High,
            GeoPoint::new(52.88, -118.08),
            "Highway Patrol",
            (5, 0),
        ),
        seed(
            "15",
            "Flooding - Miette Avenue",
            "Burst water main has flooded Miette Avenue intersection. Water depth makes passage dangerous. Volunteer traffic control needed at detour points.",
            RiskLevel::Low,
            GeoPoint::new(52.873, -118.073),
            "Water Department",
            (11, 30),
        ),
        seed(
            "16",
            "Chemical Spill - Industrial Park Access",
            "Industrial chemical spill on access road. Hazmat team on site. Area completely closed to all non-emergency personnel.",
            RiskLevel::TechnicianOnly,
            GeoPoint::new(52.871, -118.068),
            "Hazmat Team",
            (8, 45),
        ),
        seed(
            "17",
            "Collapsed Building Debris - Cedar Avenue",
            "Partial building collapse has spread debris across Cedar Avenue. Road blocked but can be navigated on foot. Volunteers needed for debris clearing.",
            RiskLevel::Low,
            GeoPoint::new(52.8785, -118.076),
            "Building Safety",
            (9, 15),
        ),
    ]
});

/// All seed events were reported on 2025-11-09.
fn reported_on_day(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 9)
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .expect("seed timestamps are valid")
}

fn seed(
    id: &str,
    title: &str,
    description: &str,
    risk_level: RiskLevel,
    location: GeoPoint,
    reported_by: &str,
    (hour, minute): (u32, u32),
) -> HazardEvent {
    HazardEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        risk_level,
        location,
        reported_by: reported_by.to_string(),
        reported_at: reported_on_day(hour, minute),
    }
}
