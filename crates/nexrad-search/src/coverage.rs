//! Ground radius within which a radar beam can reach a given altitude.
//!
//! Spherical earth, no refraction, no beam width. The earth center, the
//! radar site and the beam end form a triangle; the earth-center angle times
//! the site's distance from the center is the ground distance.

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Useful slant range of the WSR-88D beam in kilometers.
pub const BEAM_RANGE_KM: f64 = 230.0;

/// Lowest elevation angle of the operational scan strategies, degrees.
pub const LOW_ANGLE_DEG: f64 = 0.5;

/// Highest elevation angle of the operational scan strategies, degrees.
pub const HIGH_ANGLE_DEG: f64 = 19.5;

/// Query heights above this are outside the operational envelope.
pub const MAX_QUERY_HEIGHT_M: f64 = 90_000.0;

/// Highest point a station could sit at.
pub const MAX_STATION_ELEVATION_M: f64 = 6267.0;

/// Ground distance of the lowest beam at full slant range from sea level.
pub const FIXED_RADIUS_M: f64 = 229_819.074224;

/// Ground radius in meters around a station at `elevation` whose beam can
/// sample `height` (both meters above sea level).
///
/// Returns `None` when the height is out of reach: above the envelope,
/// at or below the station, or beyond the slant range at every angle.
pub fn coverage_radius(height: f64, elevation: f64) -> Option<f64> {
    if height > MAX_QUERY_HEIGHT_M
        || elevation > MAX_STATION_ELEVATION_M
        || elevation >= height
    {
        return None;
    }

    let site = EARTH_RADIUS_KM + elevation / 1000.0;
    let beam_end = site + (height - elevation) / 1000.0;

    let (low_center_angle, low_slant) = solve_ssa(site, beam_end, LOW_ANGLE_DEG);
    if low_slant <= BEAM_RANGE_KM {
        return Some(low_center_angle * site * 1000.0);
    }

    let (_, high_slant) = solve_ssa(site, beam_end, HIGH_ANGLE_DEG);
    if high_slant > BEAM_RANGE_KM {
        return None;
    }

    // Somewhere between the two angles the beam reaches the height at
    // exactly full range.
    let cos_center = (site * site + beam_end * beam_end - BEAM_RANGE_KM * BEAM_RANGE_KM)
        / (2.0 * site * beam_end);
    let center_angle = cos_center.clamp(-1.0, 1.0).acos();

    Some(center_angle * site * 1000.0)
}

/// Solve the (center, site, beam end) triangle from the two radii and the
/// beam elevation angle. Returns (earth-center angle in radians, slant range).
fn solve_ssa(site: f64, beam_end: f64, elevation_deg: f64) -> (f64, f64) {
    let site_angle = (90.0 + elevation_deg).to_radians();
    let beam_angle = (site * site_angle.sin() / beam_end).asin();
    let center_angle = std::f64::consts::PI - beam_angle - site_angle;
    let slant = beam_end * center_angle.sin() / site_angle.sin();
    (center_angle, slant)
}
