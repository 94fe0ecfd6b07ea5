//! Search the NEXRAD Level II archive by region, altitude and time.
//!
//! Stations are selected by whether their beam can reach the query volume,
//! archive keys are enumerated per station and day, and matching files are
//! downloaded with bounded concurrency.

pub mod config;
pub mod coverage;
pub mod download;
pub mod keys;
pub mod matcher;
pub mod search;
pub mod stations;

pub use config::SearchConfig;
pub use coverage::coverage_radius;
pub use download::{DownloadReport, DownloadScheduler};
pub use keys::KeyEnumerator;
pub use matcher::{DomainStationMatcher, MatchRegion, RadiusMode, StationMatch};
pub use search::NexradSearch;
pub use stations::{find_station, Station, STATIONS};
