//! Coordinate projections for radar coverage geometry.
//!
//! Implements the projections from scratch without external dependencies.
//! Station matching works in UTM so that radii in meters can be added to
//! query bounds and compared against station positions.

pub mod polygon;
pub mod utm;

pub use polygon::{circle_polygon, point_in_polygon, PlanarPoint, CIRCLE_VERTICES};
pub use utm::UtmCoordinate;
