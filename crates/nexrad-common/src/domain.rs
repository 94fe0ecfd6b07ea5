//! Query domain types.

use serde::{Deserialize, Serialize};

use crate::error::{NexradError, NexradResult};

/// Query height used when the caller does not give one (meters above sea level).
pub const DEFAULT_QUERY_HEIGHT_M: f64 = 10_000.0;

/// Southern and northern latitude limits of the UTM grid.
const MIN_LATITUDE: f64 = -80.0;
const MAX_LATITUDE: f64 = 84.0;

/// A geographic query volume: a lat/lon box plus an optional altitude.
///
/// Coordinates are in degrees; `height` is meters above sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingDomain {
    pub max_lat: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub min_lon: f64,
    #[serde(default)]
    pub height: Option<f64>,
}

impl BoundingDomain {
    /// Create a domain from its corner coordinates, without a height.
    pub fn new(max_lat: f64, max_lon: f64, min_lat: f64, min_lon: f64) -> Self {
        Self {
            max_lat,
            max_lon,
            min_lat,
            min_lon,
            height: None,
        }
    }

    /// Attach a query height in meters above sea level.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Parse a command-line domain string: "maxlat,maxlon,minlat,minlon"
    pub fn from_arg_string(s: &str) -> Result<Self, DomainParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(DomainParseError::InvalidFormat(s.to_string()));
        }

        let number = |part: &str| -> Result<f64, DomainParseError> {
            part.parse()
                .map_err(|_| DomainParseError::InvalidNumber(part.to_string()))
        };

        Ok(Self::new(
            number(parts[0])?,
            number(parts[1])?,
            number(parts[2])?,
            number(parts[3])?,
        ))
    }

    /// Query height, falling back to [`DEFAULT_QUERY_HEIGHT_M`].
    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_QUERY_HEIGHT_M)
    }

    /// Check that the domain is usable for station matching.
    pub fn validate(&self) -> NexradResult<()> {
        let values = [self.max_lat, self.max_lon, self.min_lat, self.min_lon];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(NexradError::InvalidDomain(format!(
                "non-finite coordinate in {}",
                self
            )));
        }

        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return Err(NexradError::InvalidDomain(format!(
                "minimum exceeds maximum in {}",
                self
            )));
        }

        if self.min_lat < MIN_LATITUDE || self.max_lat > MAX_LATITUDE {
            return Err(NexradError::InvalidDomain(format!(
                "latitude outside [{}, {}] in {}",
                MIN_LATITUDE, MAX_LATITUDE, self
            )));
        }

        if self.min_lon < -180.0 || self.max_lon > 180.0 {
            return Err(NexradError::InvalidDomain(format!(
                "longitude outside [-180, 180] in {}",
                self
            )));
        }

        if let Some(height) = self.height {
            if !height.is_finite() {
                return Err(NexradError::InvalidDomain("non-finite height".to_string()));
            }
        }

        Ok(())
    }

    /// Check if a point is contained within the unexpanded box.
    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

impl std::fmt::Display for BoundingDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{} to {},{}",
            self.max_lat, self.max_lon, self.min_lat, self.min_lon
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainParseError {
    #[error("Invalid domain format: {0}. Expected 'maxlat,maxlon,minlat,minlon'")]
    InvalidFormat(String),

    #[error("Invalid number in domain: {0}")]
    InvalidNumber(String),
}

impl From<DomainParseError> for NexradError {
    fn from(err: DomainParseError) -> Self {
        NexradError::InvalidDomain(err.to_string())
    }
}
