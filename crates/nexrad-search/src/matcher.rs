//! Select the stations whose coverage can reach a query volume.
//!
//! The query box is expanded by each station's relevant radius into a
//! catchment rectangle. A station matches when it falls in the vertical or
//! horizontal band of that rectangle, or in one of its corner squares and
//! within the relevant radius of the matching domain corner.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use nexrad_common::{BoundingDomain, NexradResult};
use projection::{circle_polygon, point_in_polygon, PlanarPoint, UtmCoordinate};

use crate::coverage::{coverage_radius, FIXED_RADIUS_M};
use crate::stations::{Station, STATIONS};

/// Share of a station's radius that counts as relevant.
pub const DEFAULT_RELEVANT_RADIUS_COEFFICIENT: f64 = 0.5;

/// How a station's radius is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// Radius from beam geometry at the query height.
    #[default]
    HeightAware,
    /// Same radius for every station and height.
    Fixed,
}

/// Part of the catchment rectangle a station was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRegion {
    VerticalBand,
    HorizontalBand,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl MatchRegion {
    /// Evaluation order. The first region that accepts a station wins.
    pub const ORDER: [MatchRegion; 6] = [
        MatchRegion::VerticalBand,
        MatchRegion::HorizontalBand,
        MatchRegion::NorthEast,
        MatchRegion::SouthEast,
        MatchRegion::SouthWest,
        MatchRegion::NorthWest,
    ];

    /// Domain corner a corner region is anchored at, as (lat, lon).
    pub fn corner(&self, domain: &BoundingDomain) -> Option<(f64, f64)> {
        match self {
            MatchRegion::VerticalBand | MatchRegion::HorizontalBand => None,
            MatchRegion::NorthEast => Some((domain.max_lat, domain.max_lon)),
            MatchRegion::SouthEast => Some((domain.min_lat, domain.max_lon)),
            MatchRegion::SouthWest => Some((domain.min_lat, domain.min_lon)),
            MatchRegion::NorthWest => Some((domain.max_lat, domain.min_lon)),
        }
    }

    /// Rectangular pre-filter for this region. Bounds are inclusive.
    fn bounds_contain(&self, domain: &BoundingDomain, c: &Catchment, lat: f64, lon: f64) -> bool {
        let (lat_range, lon_range) = match self {
            MatchRegion::VerticalBand => (
                (c.min_lat, c.max_lat),
                (domain.min_lon, domain.max_lon),
            ),
            MatchRegion::HorizontalBand => (
                (domain.min_lat, domain.max_lat),
                (c.min_lon, c.max_lon),
            ),
            MatchRegion::NorthEast => ((domain.max_lat, c.max_lat), (domain.max_lon, c.max_lon)),
            MatchRegion::SouthEast => ((c.min_lat, domain.min_lat), (domain.max_lon, c.max_lon)),
            MatchRegion::SouthWest => ((c.min_lat, domain.min_lat), (c.min_lon, domain.min_lon)),
            MatchRegion::NorthWest => ((domain.max_lat, c.max_lat), (c.min_lon, domain.min_lon)),
        };

        within(lat, lat_range) && within(lon, lon_range)
    }
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    value >= low && value <= high
}

/// Query box expanded by a relevant radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catchment {
    pub max_lat: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub min_lon: f64,
}

/// A station that can see into the query volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMatch<'a> {
    pub station: &'a Station,
    pub region: MatchRegion,
    /// Radius in meters the station was matched with.
    pub relevant_radius: f64,
}

/// Classifies registry stations against a [`BoundingDomain`].
#[derive(Debug, Clone, Copy)]
pub struct DomainStationMatcher {
    mode: RadiusMode,
    coefficient: f64,
}

impl Default for DomainStationMatcher {
    fn default() -> Self {
        Self::new(RadiusMode::HeightAware, DEFAULT_RELEVANT_RADIUS_COEFFICIENT)
    }
}

impl DomainStationMatcher {
    pub fn new(mode: RadiusMode, coefficient: f64) -> Self {
        Self { mode, coefficient }
    }

    pub fn mode(&self) -> RadiusMode {
        self.mode
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Relevant radius for `station` at `height`, `None` when the station
    /// cannot reach it.
    pub fn relevant_radius(&self, station: &Station, height: f64) -> Option<f64> {
        let radius = match self.mode {
            RadiusMode::HeightAware => coverage_radius(height, station.elevation_or_sea_level())?,
            RadiusMode::Fixed => FIXED_RADIUS_M,
        };
        Some(self.coefficient * radius)
    }

    /// Ids of the registry stations relevant to `domain`, in registry order.
    pub fn station_ids(&self, domain: &BoundingDomain) -> NexradResult<Vec<&'static str>> {
        Ok(self
            .matches(domain)?
            .into_iter()
            .map(|m| m.station.id)
            .collect())
    }

    /// Registry stations relevant to `domain` with the region each matched in.
    pub fn matches(&self, domain: &BoundingDomain) -> NexradResult<Vec<StationMatch<'static>>> {
        self.matches_in(domain, STATIONS)
    }

    /// Like [`matches`](Self::matches) over an arbitrary station list.
    pub fn matches_in<'a>(
        &self,
        domain: &BoundingDomain,
        stations: &'a [Station],
    ) -> NexradResult<Vec<StationMatch<'a>>> {
        domain.validate()?;

        let height = domain.height_or_default();
        let north_east = UtmCoordinate::from_lat_lon(domain.max_lat, domain.max_lon)?;
        let south_west = UtmCoordinate::from_lat_lon(domain.min_lat, domain.min_lon)?;

        let mut matched = Vec::new();

        for station in stations {
            let Some(radius) = self.relevant_radius(station, height) else {
                trace!(station = station.id, height, "Station cannot reach height");
                continue;
            };

            let catchment = expand(&north_east, &south_west, radius);

            if let Some(region) = classify(domain, &catchment, station, radius) {
                debug!(
                    station = station.id,
                    region = ?region,
                    relevant_radius = radius,
                    "Station matched"
                );
                matched.push(StationMatch {
                    station,
                    region,
                    relevant_radius: radius,
                });
            }
        }

        Ok(matched)
    }
}

/// Expand the projected domain corners by `radius` meters and return to
/// geographic coordinates.
pub fn expand(north_east: &UtmCoordinate, south_west: &UtmCoordinate, radius: f64) -> Catchment {
    let (max_lat, max_lon) = north_east.offset(radius, radius).to_lat_lon();
    let (min_lat, min_lon) = south_west.offset(-radius, -radius).to_lat_lon();

    Catchment {
        max_lat,
        max_lon,
        min_lat,
        min_lon,
    }
}

/// First region of [`MatchRegion::ORDER`] that accepts `station`.
pub fn classify(
    domain: &BoundingDomain,
    catchment: &Catchment,
    station: &Station,
    radius: f64,
) -> Option<MatchRegion> {
    MatchRegion::ORDER.into_iter().find(|region| {
        if !region.bounds_contain(domain, catchment, station.latitude, station.longitude) {
            return false;
        }

        match region.corner(domain) {
            None => true,
            Some((corner_lat, corner_lon)) => corner_contains(
                corner_lat,
                corner_lon,
                station.latitude,
                station.longitude,
                radius,
            )
            .unwrap_or_else(|e| {
                debug!(station = station.id, error = %e, "Corner test failed");
                false
            }),
        }
    })
}

/// Whether a station lies within `radius` meters of a domain corner.
///
/// The circle is a polygon in the corner's UTM zone and the station is
/// projected into that same zone.
pub fn corner_contains(
    corner_lat: f64,
    corner_lon: f64,
    station_lat: f64,
    station_lon: f64,
    radius: f64,
) -> NexradResult<bool> {
    let corner = UtmCoordinate::from_lat_lon(corner_lat, corner_lon)?;
    let station = UtmCoordinate::from_lat_lon_in_zone(station_lat, station_lon, corner.zone_number)?;

    let circle = circle_polygon(PlanarPoint::new(corner.easting, corner.northing), radius);

    Ok(point_in_polygon(
        &circle,
        PlanarPoint::new(station.easting, station.northing),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::find_station;

    fn kind() -> &'static Station {
        find_station("KIND").unwrap()
    }

    #[test]
    fn test_station_at_corner_is_inside() {
        assert!(corner_contains(39.7074962, -86.2803675, 39.7074962, -86.2803675, 1000.0).unwrap());
        assert!(corner_contains(45.0, -120.0, 45.0, -120.0, 1.0).unwrap());
    }

    #[test]
    fn test_corner_circle_radius() {
        // 0.1 deg of latitude is about 11.1 km
        assert!(corner_contains(40.0, -86.0, 40.1, -86.0, 12_000.0).unwrap());
        assert!(!corner_contains(40.0, -86.0, 40.1, -86.0, 10_000.0).unwrap());
    }

    #[test]
    fn test_corner_uses_corner_zone() {
        // Corner in zone 16, station just across the boundary in zone 17.
        assert!(corner_contains(40.0, -84.05, 40.0, -83.95, 20_000.0).unwrap());
    }

    #[test]
    fn test_relevant_radius_modes() {
        let height_aware = DomainStationMatcher::default();
        let r = height_aware.relevant_radius(kind(), 10_000.0).unwrap();
        assert!((r - 114_814.72).abs() < 1.0, "{}", r);
        assert_eq!(height_aware.relevant_radius(kind(), 100.0), None);

        let fixed = DomainStationMatcher::new(RadiusMode::Fixed, 0.5);
        assert_eq!(fixed.relevant_radius(kind(), 100.0), Some(0.5 * FIXED_RADIUS_M));
        assert_eq!(fixed.relevant_radius(kind(), 1e9), Some(0.5 * FIXED_RADIUS_M));
    }

    #[test]
    fn test_station_inside_domain_is_vertical_band() {
        let domain = BoundingDomain::new(40.0, -86.0, 39.5, -86.5);
        let matches = DomainStationMatcher::default()
            .matches_in(&domain, std::slice::from_ref(kind()))
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].region, MatchRegion::VerticalBand);
    }

    #[test]
    fn test_station_near_north_east_corner() {
        // KIND is north-east of the box, about 15 km from its corner.
        let domain = BoundingDomain::new(39.6, -86.4, 39.0, -87.0);
        let matches = DomainStationMatcher::default()
            .matches_in(&domain, std::slice::from_ref(kind()))
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].region, MatchRegion::NorthEast);
    }

    #[test]
    fn test_station_near_south_west_corner() {
        let domain = BoundingDomain::new(40.8, -85.1, 39.8, -86.15);
        let matches = DomainStationMatcher::default()
            .matches_in(&domain, std::slice::from_ref(kind()))
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].region, MatchRegion::SouthWest);
    }

    fn single_region(domain: &BoundingDomain) -> MatchRegion {
        let matches = DomainStationMatcher::default()
            .matches_in(domain, std::slice::from_ref(kind()))
            .unwrap();
        assert_eq!(matches.len(), 1, "{:?}", matches);
        matches[0].region
    }

    fn catchment_for(domain: &BoundingDomain, radius: f64) -> Catchment {
        let north_east = UtmCoordinate::from_lat_lon(domain.max_lat, domain.max_lon).unwrap();
        let south_west = UtmCoordinate::from_lat_lon(domain.min_lat, domain.min_lon).unwrap();
        expand(&north_east, &south_west, radius)
    }

    #[test]
    fn test_station_east_of_domain_is_horizontal_band() {
        // KIND is about 19 km east of the box, inside its latitude span.
        let domain = BoundingDomain::new(40.0, -86.5, 39.5, -87.0);
        assert_eq!(single_region(&domain), MatchRegion::HorizontalBand);
    }

    #[test]
    fn test_station_near_south_east_corner() {
        let domain = BoundingDomain::new(40.4, -86.9, 39.8, -87.5);
        assert_eq!(single_region(&domain), MatchRegion::SouthEast);
    }

    #[test]
    fn test_station_near_north_west_corner() {
        let domain = BoundingDomain::new(39.6, -85.7, 39.0, -86.2);
        assert_eq!(single_region(&domain), MatchRegion::NorthWest);
    }

    #[test]
    fn test_region_order() {
        assert_eq!(
            MatchRegion::ORDER,
            [
                MatchRegion::VerticalBand,
                MatchRegion::HorizontalBand,
                MatchRegion::NorthEast,
                MatchRegion::SouthEast,
                MatchRegion::SouthWest,
                MatchRegion::NorthWest,
            ]
        );
    }

    #[test]
    fn test_overlapping_regions_first_wins() {
        let station = kind();
        let radius = DomainStationMatcher::default()
            .relevant_radius(station, 10_000.0)
            .unwrap();

        // Inside the box: both bands accept, the vertical band is earlier.
        let inside = BoundingDomain::new(40.0, -86.0, 39.5, -86.5);
        let c = catchment_for(&inside, radius);
        assert!(MatchRegion::VerticalBand.bounds_contain(&inside, &c, station.latitude, station.longitude));
        assert!(MatchRegion::HorizontalBand.bounds_contain(&inside, &c, station.latitude, station.longitude));
        assert_eq!(classify(&inside, &c, station, radius), Some(MatchRegion::VerticalBand));

        // On the northern edge line east of the box: the horizontal band and
        // the north-east corner both accept, the band is earlier.
        let edge = BoundingDomain::new(station.latitude, -86.5, 39.2, -87.0);
        let c = catchment_for(&edge, radius);
        assert!(MatchRegion::HorizontalBand.bounds_contain(&edge, &c, station.latitude, station.longitude));
        assert!(MatchRegion::NorthEast.bounds_contain(&edge, &c, station.latitude, station.longitude));
        assert!(corner_contains(edge.max_lat, edge.max_lon, station.latitude, station.longitude, radius).unwrap());
        assert_eq!(classify(&edge, &c, station, radius), Some(MatchRegion::HorizontalBand));
    }

    #[test]
    fn test_corner_square_outside_circle_is_rejected() {
        // KIND sits in the catchment's north-east square but about 130 km
        // from the corner, beyond the 115 km relevant radius.
        let domain = BoundingDomain::new(38.88, -87.35, 38.0, -88.5);
        let matcher = DomainStationMatcher::default();
        let radius = matcher.relevant_radius(kind(), 10_000.0).unwrap();

        let north_east = UtmCoordinate::from_lat_lon(domain.max_lat, domain.max_lon).unwrap();
        let south_west = UtmCoordinate::from_lat_lon(domain.min_lat, domain.min_lon).unwrap();
        let catchment = expand(&north_east, &south_west, radius);
        assert!(kind().latitude < catchment.max_lat);
        assert!(kind().longitude < catchment.max_lon);

        assert_eq!(classify(&domain, &catchment, kind(), radius), None);
    }

    #[test]
    fn test_far_station_matches_nothing() {
        let domain = BoundingDomain::new(30.0, -70.0, 29.0, -71.0);
        let matches = DomainStationMatcher::default()
            .matches_in(&domain, std::slice::from_ref(kind()))
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_unreachable_height_skips_station() {
        let domain = BoundingDomain::new(40.0, -86.0, 39.5, -86.5).with_height(100.0);
        let matches = DomainStationMatcher::default()
            .matches_in(&domain, std::slice::from_ref(kind()))
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_expand_grows_box() {
        let north_east = UtmCoordinate::from_lat_lon(40.0, -86.0).unwrap();
        let south_west = UtmCoordinate::from_lat_lon(39.5, -86.5).unwrap();
        let c = expand(&north_east, &south_west, 50_000.0);

        assert!(c.max_lat > 40.0 && c.max_lon > -86.0);
        assert!(c.min_lat < 39.5 && c.min_lon < -86.5);
        // 50 km is roughly 0.45 deg of latitude
        assert!((c.max_lat - 40.0 - 0.45).abs() < 0.05);
    }

    #[test]
    fn test_invalid_domain_is_error() {
        let domain = BoundingDomain::new(39.0, -86.0, 40.0, -87.0);
        assert!(DomainStationMatcher::default().matches(&domain).is_err());
    }
}
