//! Universal Transverse Mercator projection.
//!
//! UTM divides the globe into 60 zones of 6 degrees of longitude, each with its
//! own transverse Mercator projection on the WGS84 ellipsoid. Within a zone,
//! positions are expressed as easting/northing in meters, which makes
//! distance and containment arithmetic planar.
//!
//! The forward and inverse transforms use the series expansions from
//! Snyder, "Map Projections: A Working Manual" (USGS PP 1395), pp. 61-64.
//!
//! The inverse transform accepts eastings and northings far outside the
//! nominal zone range; expanded query rectangles routinely leave the zone
//! they were projected in.

use std::f64::consts::PI;

use nexrad_common::{NexradError, NexradResult};

/// Scale factor on the central meridian.
const K0: f64 = 0.9996;

/// WGS84 first eccentricity squared.
const E: f64 = 0.006_694_38;

/// WGS84 equatorial radius (meters).
const R: f64 = 6_378_137.0;

const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Latitude band letters from 80S upward, 8 degrees each ('X' spans 12).
const ZONE_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWXX";

pub const MIN_LATITUDE: f64 = -80.0;
pub const MAX_LATITUDE: f64 = 84.0;

/// A position in UTM coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    /// Meters east, including the 500 km false easting
    pub easting: f64,
    /// Meters north, including the 10 000 km false northing in the south
    pub northing: f64,
    /// Zone number (1-60)
    pub zone_number: u8,
    /// Latitude band letter (C-X)
    pub zone_letter: char,
}

impl UtmCoordinate {
    /// Project a geographic position (degrees) into its natural UTM zone.
    pub fn from_lat_lon(lat: f64, lon: f64) -> NexradResult<Self> {
        check_position(lat, lon)?;
        project(lat, lon, zone_number(lat, lon))
    }

    /// Project a geographic position into a specific zone.
    ///
    /// Used to express a point relative to a reference point in another zone;
    /// accuracy degrades with distance from the zone's central meridian.
    pub fn from_lat_lon_in_zone(lat: f64, lon: f64, zone_number: u8) -> NexradResult<Self> {
        check_position(lat, lon)?;
        if !(1..=60).contains(&zone_number) {
            return Err(NexradError::ProjectionError(format!(
                "zone number {} outside 1-60",
                zone_number
            )));
        }
        project(lat, lon, zone_number)
    }

    /// Whether this coordinate is measured in the northern hemisphere frame.
    pub fn is_northern(&self) -> bool {
        self.zone_letter >= 'N'
    }

    /// A copy shifted by `d_east`/`d_north` meters within the same zone.
    pub fn offset(&self, d_east: f64, d_north: f64) -> Self {
        Self {
            easting: self.easting + d_east,
            northing: self.northing + d_north,
            ..*self
        }
    }

    /// Convert back to geographic coordinates.
    ///
    /// Returns (lat, lon) in degrees.
    pub fn to_lat_lon(&self) -> (f64, f64) {
        let e2 = E * E;
        let e3 = e2 * E;
        let e_p2 = E / (1.0 - E);

        let sqrt_e = (1.0 - E).sqrt();
        let n1 = (1.0 - sqrt_e) / (1.0 + sqrt_e);
        let n2 = n1 * n1;
        let n3 = n2 * n1;
        let n4 = n3 * n1;
        let n5 = n4 * n1;

        let m1 = 1.0 - E / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0;
        let p2 = 3.0 / 2.0 * n1 - 27.0 / 32.0 * n3 + 269.0 / 512.0 * n5;
        let p3 = 21.0 / 16.0 * n2 - 55.0 / 32.0 * n4;
        let p4 = 151.0 / 96.0 * n3 - 417.0 / 128.0 * n5;
        let p5 = 1097.0 / 512.0 * n4;

        let x = self.easting - FALSE_EASTING;
        let mut y = self.northing;
        if !self.is_northern() {
            y -= FALSE_NORTHING_SOUTH;
        }

        // Footpoint latitude
        let m = y / K0;
        let mu = m / (R * m1);
        let p_rad = mu
            + p2 * (2.0 * mu).sin()
            + p3 * (4.0 * mu).sin()
            + p4 * (6.0 * mu).sin()
            + p5 * (8.0 * mu).sin();

        let (p_sin, p_cos) = p_rad.sin_cos();
        let p_tan = p_sin / p_cos;
        let p_tan2 = p_tan * p_tan;
        let p_tan4 = p_tan2 * p_tan2;

        let ep_sin = 1.0 - E * p_sin * p_sin;
        let n = R / ep_sin.sqrt();
        let r = (1.0 - E) / ep_sin;

        let c = e_p2 * p_cos * p_cos;
        let c2 = c * c;

        let d = x / (n * K0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let lat = p_rad
            - (p_tan / r)
                * (d2 / 2.0
                    - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * e_p2)
                    + d6 / 720.0
                        * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4
                            - 252.0 * e_p2
                            - 3.0 * c2));

        let lon = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
            + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * e_p2 + 24.0 * p_tan4))
            / p_cos;

        let central = central_longitude(self.zone_number).to_radians();
        let lon = wrap_angle(lon + central);

        (lat.to_degrees(), lon.to_degrees())
    }
}

/// Forward transverse Mercator into `zone`.
fn project(lat: f64, lon: f64, zone: u8) -> NexradResult<UtmCoordinate> {
    let zone_letter = zone_letter(lat).ok_or_else(|| {
        NexradError::ProjectionError(format!("no UTM latitude band for {}", lat))
    })?;

    let e2 = E * E;
    let e3 = e2 * E;
    let e_p2 = E / (1.0 - E);

    let m1 = 1.0 - E / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0;
    let m2 = 3.0 * E / 8.0 + 3.0 * e2 / 32.0 + 45.0 * e3 / 1024.0;
    let m3 = 15.0 * e2 / 256.0 + 45.0 * e3 / 1024.0;
    let m4 = 35.0 * e3 / 3072.0;

    let lat_rad = lat.to_radians();
    let (lat_sin, lat_cos) = lat_rad.sin_cos();
    let lat_tan = lat_sin / lat_cos;
    let lat_tan2 = lat_tan * lat_tan;
    let lat_tan4 = lat_tan2 * lat_tan2;

    let central = central_longitude(zone).to_radians();

    let n = R / (1.0 - E * lat_sin * lat_sin).sqrt();
    let c = e_p2 * lat_cos * lat_cos;

    let a = lat_cos * wrap_angle(lon.to_radians() - central);
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    // Meridian arc length from the equator
    let m = R
        * (m1 * lat_rad - m2 * (2.0 * lat_rad).sin() + m3 * (4.0 * lat_rad).sin()
            - m4 * (6.0 * lat_rad).sin());

    let easting = K0
        * n
        * (a + a3 / 6.0 * (1.0 - lat_tan2 + c)
            + a5 / 120.0 * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 72.0 * c - 58.0 * e_p2))
        + FALSE_EASTING;

    let mut northing = K0
        * (m + n
            * lat_tan
            * (a2 / 2.0
                + a4 / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c * c)
                + a6 / 720.0 * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 600.0 * c - 330.0 * e_p2)));

    if lat < 0.0 {
        northing += FALSE_NORTHING_SOUTH;
    }

    Ok(UtmCoordinate {
        easting,
        northing,
        zone_number: zone,
        zone_letter,
    })
}

fn check_position(lat: f64, lon: f64) -> NexradResult<()> {
    if !lat.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(NexradError::ProjectionError(format!(
            "latitude {} outside [{}, {}]",
            lat, MIN_LATITUDE, MAX_LATITUDE
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(NexradError::ProjectionError(format!(
            "longitude {} outside [-180, 180]",
            lon
        )));
    }
    Ok(())
}

/// Natural zone number for a position, including the Norway and Svalbard exceptions.
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    let lon = if lon >= 180.0 {
        (lon + 180.0) % 360.0 - 180.0
    } else {
        lon
    };

    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    if (72.0..=84.0).contains(&lat) && lon >= 0.0 {
        if lon < 9.0 {
            return 31;
        } else if lon < 21.0 {
            return 33;
        } else if lon < 33.0 {
            return 35;
        } else if lon < 42.0 {
            return 37;
        }
    }

    (((lon + 180.0) / 6.0) as i64 % 60 + 1) as u8
}

/// Latitude band letter, or `None` outside the UTM latitude range.
pub fn zone_letter(lat: f64) -> Option<char> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return None;
    }
    let index = ((lat - MIN_LATITUDE) as usize) >> 3;
    ZONE_LETTERS.get(index).map(|&b| b as char)
}

/// Central meridian of a zone in degrees.
pub fn central_longitude(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Normalize an angle in radians to [-pi, pi).
fn wrap_angle(value: f64) -> f64 {
    (value + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_numbers() {
        // Indianapolis
        assert_eq!(zone_number(39.7074962, -86.2803675), 16);
        assert_eq!(zone_number(0.0, 0.0), 31);
        assert_eq!(zone_number(0.0, -180.0), 1);
        assert_eq!(zone_number(0.0, 179.9), 60);
        // Norway exception
        assert_eq!(zone_number(60.0, 5.0), 32);
        // Svalbard exceptions
        assert_eq!(zone_number(78.0, 15.0), 33);
        assert_eq!(zone_number(78.0, 25.0), 35);
    }

    #[test]
    fn test_zone_letters() {
        assert_eq!(zone_letter(39.7), Some('S'));
        assert_eq!(zone_letter(0.0), Some('N'));
        assert_eq!(zone_letter(-0.1), Some('M'));
        assert_eq!(zone_letter(-80.0), Some('C'));
        assert_eq!(zone_letter(84.0), Some('X'));
        assert_eq!(zone_letter(84.5), None);
        assert_eq!(zone_letter(-80.5), None);
    }

    #[test]
    fn test_central_meridian_is_false_easting() {
        let utm = UtmCoordinate::from_lat_lon(40.0, -87.0).unwrap();
        assert_eq!(utm.zone_number, 16);
        assert!((utm.easting - FALSE_EASTING).abs() < 1e-6);
    }

    #[test]
    fn test_equator_northing() {
        let utm = UtmCoordinate::from_lat_lon(0.0, 3.0).unwrap();
        assert!(utm.northing.abs() < 1e-6);
        assert!(utm.is_northern());
    }

    #[test]
    fn test_known_position() {
        // KIND radar site
        let utm = UtmCoordinate::from_lat_lon(39.7074962, -86.2803675).unwrap();
        assert_eq!(utm.zone_number, 16);
        assert_eq!(utm.zone_letter, 'S');
        assert!((utm.easting - 561_689.2).abs() < 1.0, "easting {}", utm.easting);
        assert!((utm.northing - 4_395_540.5).abs() < 1.0, "northing {}", utm.northing);
    }

    #[test]
    fn test_round_trip() {
        let points = [
            (39.7074962, -86.2803675),
            (-33.9, 151.2),
            (64.5114973, -165.2949071),
            (18.1155998, -66.0780644),
            (0.0, 0.0),
        ];

        for (lat, lon) in points {
            let utm = UtmCoordinate::from_lat_lon(lat, lon).unwrap();
            let (lat2, lon2) = utm.to_lat_lon();
            assert!((lat - lat2).abs() < 1e-5, "lat {} -> {}", lat, lat2);
            assert!((lon - lon2).abs() < 1e-5, "lon {} -> {}", lon, lon2);
        }
    }

    #[test]
    fn test_offset_moves_north_and_east() {
        let utm = UtmCoordinate::from_lat_lon(39.0, -86.0).unwrap();
        let (lat, lon) = utm.offset(10_000.0, 10_000.0).to_lat_lon();
        assert!(lat > 39.0 && lat < 39.2);
        assert!(lon > -86.0 && lon < -85.8);
    }

    #[test]
    fn test_negative_northing_in_northern_zone() {
        // Expanding a box that touches the equator pushes northing below zero.
        let utm = UtmCoordinate::from_lat_lon(0.0, 0.0).unwrap();
        let (lat, _) = utm.offset(0.0, -50_000.0).to_lat_lon();
        assert!(lat < 0.0 && lat > -1.0);
    }

    #[test]
    fn test_forced_zone() {
        let natural = UtmCoordinate::from_lat_lon(39.0, -84.5).unwrap();
        let forced = UtmCoordinate::from_lat_lon_in_zone(39.0, -84.5, 16).unwrap();
        assert_eq!(natural.zone_number, 16);
        assert_eq!(forced.zone_number, 16);

        let east_zone = UtmCoordinate::from_lat_lon_in_zone(39.0, -83.9, 16).unwrap();
        assert!(east_zone.easting > FALSE_EASTING + 250_000.0);
        assert!(UtmCoordinate::from_lat_lon_in_zone(39.0, -83.9, 0).is_err());
        assert!(UtmCoordinate::from_lat_lon_in_zone(39.0, -83.9, 61).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(UtmCoordinate::from_lat_lon(85.0, 0.0).is_err());
        assert!(UtmCoordinate::from_lat_lon(-81.0, 0.0).is_err());
        assert!(UtmCoordinate::from_lat_lon(10.0, 181.0).is_err());
        assert!(UtmCoordinate::from_lat_lon(f64::NAN, 0.0).is_err());
    }
}
