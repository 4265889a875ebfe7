//! Scenarios over the Jasper demo dataset.

use approx::assert_abs_diff_eq;
use hazard_router::utils::fixtures::{JASPER_CENTER, MOCK_EVENTS, USER_LOCATION};
use hazard_router::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn event(id: &str) -> &'static HazardEvent {
    MOCK_EVENTS
        .iter()
        .find(|e| e.id == id)
        .expect("fixture event exists")
}

#[test]
fn test_user_is_near_town_center() {
    assert_eq!(calculate_distance(&JASPER_CENTER, &USER_LOCATION), 0.46);
    assert_eq!(
        format_distance(calculate_distance(&JASPER_CENTER, &USER_LOCATION)),
        "460m"
    );
}

#[test]
fn test_event_list_order() {
    init_logger();
    let sorted = sort_events_by_distance(MOCK_EVENTS.as_slice(), &USER_LOCATION);
    let ids: Vec<&str> = sorted.iter().map(|r| r.item.id.as_str()).collect();

    // 14 and 16 are both 0.65 km away and keep their input order
    assert_eq!(
        ids,
        vec![
            "15", "11", "12", "17", "2", "3", "13", "14", "16", "6", "10", "1", "9", "8", "5", "4",
            "7"
        ]
    );
    assert_eq!(sorted[0].distance, 0.26);
    assert_eq!(sorted[7].distance, sorted[8].distance);
    assert_eq!(format_distance(sorted[0].distance), "260m");
    assert_eq!(format_distance(sorted[16].distance), "4.9km");
}

#[test]
fn test_sort_does_not_touch_dataset() {
    let before = MOCK_EVENTS.to_vec();
    let _ = sort_events_by_distance(MOCK_EVENTS.as_slice(), &USER_LOCATION);
    assert_eq!(*MOCK_EVENTS, before);
}

#[test]
fn test_routes_to_power_lines() {
    init_logger();
    let target = event("1");
    let (direct, detour) = route_to_event(&USER_LOCATION, target, &MOCK_EVENTS);

    assert_eq!(direct.points(), &[USER_LOCATION, target.location]);
    assert_eq!(
        direct.to_lng_lat(),
        vec![[-118.075, 52.875], [-118.065, 52.882]]
    );

    // only the flooding on Miette Avenue and the debris on Cedar Avenue
    // lie between the user and the power lines
    assert_eq!(detour.len(), 4);
    assert_eq!(detour.origin(), &USER_LOCATION);
    assert_eq!(detour.destination(), &target.location);

    let d_lat = target.location.lat - USER_LOCATION.lat;
    let d_lng = target.location.lng - USER_LOCATION.lng;
    for (waypoint, obstacle) in detour.waypoints().iter().zip([event("15"), event("17")]) {
        let off_lat = waypoint.lat - obstacle.location.lat;
        let off_lng = waypoint.lng - obstacle.location.lng;
        assert_abs_diff_eq!(off_lat.hypot(off_lng), 0.01, epsilon = 1e-9);
        // perpendicular to the bearing in lat/lng space
        assert_abs_diff_eq!(off_lat * d_lat + off_lng * d_lng, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_obstacles_exclude_target() {
    let obstacles = obstacles_excluding(&MOCK_EVENTS, "6");
    assert_eq!(obstacles.len(), 16);
    assert!(!obstacles.contains(&event("6").location));
    assert_eq!(obstacles[0], event("1").location);

    assert_eq!(obstacles_excluding(&MOCK_EVENTS, "missing").len(), 17);
}

#[test]
fn test_submitted_report_joins_the_list() {
    let mut events = MOCK_EVENTS.to_vec();
    let report = HazardReport {
        title: "Ice on Connaught Drive".to_string(),
        description: "Black ice near the train station.".to_string(),
        risk_level: "low".parse().expect("known risk level"),
        location: USER_LOCATION,
        reported_by: "Volunteer".to_string(),
    };
    let new_event = report.into_event();
    let new_id = new_event.id.clone();
    events.push(new_event);

    let sorted = sort_events_by_distance(&events, &USER_LOCATION);
    assert_eq!(sorted.len(), 18);
    assert_eq!(sorted[0].item.id, new_id);
    assert_eq!(sorted[0].distance, 0.0);
    assert_eq!(format_distance(sorted[0].distance), "0m");
}

#[test]
fn test_marker_colors() {
    let red = MOCK_EVENTS
        .iter()
        .filter(|e| e.risk_level.color() == "#DC2626")
        .count();
    assert_eq!(red, 6);
    assert_eq!(event("8").risk_level.color(), "#F59E0B");
    assert_eq!(get_risk_color(event("8").risk_level.as_str()), "#F59E0B");
}
