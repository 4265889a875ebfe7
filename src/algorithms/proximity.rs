//! Ordering records by distance from a reference point.

use ordered_float::OrderedFloat;

use crate::types::event::HazardEvent;
use crate::types::location::{AsGeoPoint, GeoPoint};
use crate::utils::haversine::calculate_distance;

/// A borrowed record paired with its distance from a reference point.
///
/// The record stays owned by the caller and is never modified.
#[derive(Debug, PartialEq)]
pub struct Ranked<'a, T> {
    /// The original record.
    pub item: &'a T,

    /// Distance from the reference point in kilometers, rounded to 2
    /// decimal places.
    pub distance: f64,
}

impl<T> Clone for Ranked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ranked<'_, T> {}

/// Sorts records by ascending distance from `reference`.
///
/// The sort is stable: records at equal distance keep their input
/// order. The output always has the same length as the input.
///
/// # Time Complexity
/// *O*(*n* log *n*).
pub fn sort_events_by_distance<'a, T: AsGeoPoint>(
    events: &'a [T],
    reference: &GeoPoint,
) -> Vec<Ranked<'a, T>> {
    let mut ranked: Vec<Ranked<'a, T>> = events
        .iter()
        .map(|item| Ranked {
            item,
            distance: calculate_distance(reference, &item.as_geo_point()),
        })
        .collect();
    ranked.sort_by_key(|r| OrderedFloat(r.distance));
    debug!("Sorted {} records by distance", ranked.len());
    ranked
}

/// Positions of every event except the one with `selected_id`, in
/// input order. These are the obstacles when routing to the selected
/// event.
pub fn obstacles_excluding(events: &[HazardEvent], selected_id: &str) -> Vec<GeoPoint> {
    events
        .iter()
        .filter(|event| event.id != selected_id)
        .map(AsGeoPoint::as_geo_point)
        .collect()
}

#[cfg(test)]
mod proximity_tests {
    use super::*;
    use crate::utils::generator::generate_points_near;

    #[derive(Debug, PartialEq)]
    struct Marker {
        name: &'static str,
        position: GeoPoint,
    }

    impl AsGeoPoint for Marker {
        fn as_geo_point(&self) -> GeoPoint {
            self.position
        }
    }

    const ORIGIN: GeoPoint = GeoPoint::new(0.0, 0.0);

    #[test]
    fn test_sort_is_stable() {
        // 1 degree of longitude on the equator is the same distance as
        // 1 degree of latitude, so e1 and e3 tie
        let markers = vec![
            Marker {
                name: "e1",
                position: GeoPoint::new(0.0, 1.0),
            },
            Marker {
                name: "e2",
                position: GeoPoint::new(0.0, 0.5),
            },
            Marker {
                name: "e3",
                position: GeoPoint::new(1.0, 0.0),
            },
        ];
        let sorted = sort_events_by_distance(&markers, &ORIGIN);

        assert_eq!(sorted.len(), 3);
        let names: Vec<&str> = sorted.iter().map(|r| r.item.name).collect();
        assert_eq!(names, vec!["e2", "e1", "e3"]);
        assert_eq!(sorted[1].distance, sorted[2].distance);
    }

    #[test]
    fn test_sort_empty() {
        let markers: Vec<Marker> = vec![];
        assert!(sort_events_by_distance(&markers, &ORIGIN).is_empty());
    }

    #[test]
    fn test_sort_keeps_every_record() {
        let points = generate_points_near(&GeoPoint::new(52.8734, -118.0814), 20.0, 300);
        let sorted = sort_events_by_distance(&points, &ORIGIN);

        assert_eq!(sorted.len(), points.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        for point in &points {
            let count = sorted
                .iter()
                .filter(|r| std::ptr::eq(r.item, point))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_sort_borrows_original_records() {
        let markers = vec![Marker {
            name: "only",
            position: GeoPoint::new(0.0, 0.1),
        }];
        let sorted = sort_events_by_distance(&markers, &ORIGIN);
        assert!(std::ptr::eq(sorted[0].item, &markers[0]));
        assert_eq!(sorted[0].distance, 11.12);
    }

    #[test]
    fn test_sort_references() {
        let near = GeoPoint::new(0.0, 0.1);
        let far = GeoPoint::new(0.0, 0.2);
        let refs = vec![&far, &near];
        let sorted = sort_events_by_distance(&refs, &ORIGIN);
        assert_eq!(*sorted[0].item, &near);
        assert_eq!(*sorted[1].item, &far);
    }
}
