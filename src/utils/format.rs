//! Human-readable rendering of distances.

/// Formats a distance in kilometers for display.
///
/// Below 1 km the distance is shown as whole meters (`"234m"`),
/// rounding half away from zero on the scaled value. Otherwise it is
/// shown with one fractional digit (`"12.3km"`), rounded from the exact
/// binary value, with exact ties going up.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        return format!("{}m", (km * 1000.0).round() as i64);
    }
    if is_exact_tenths_tie(km) {
        return format!("{:.1}km", (km * 10.0).round() / 10.0);
    }
    format!("{:.1}km", km)
}

/// Only odd multiples of 0.25 sit exactly halfway between two tenths.
fn is_exact_tenths_tie(km: f64) -> bool {
    let quarters = km * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}
