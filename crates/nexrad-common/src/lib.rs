//! Common types and utilities shared across the NEXRAD search workspace.

pub mod domain;
pub mod error;
pub mod time;

pub use domain::{BoundingDomain, DomainParseError, DEFAULT_QUERY_HEIGHT_M};
pub use error::{NexradError, NexradResult};
pub use time::{parse_datetime, TimeParseError, TimeRange};
