//! Shared test utilities for the nexrad-search workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate float assertions
//! - Station and archive-key fixtures
//! - An in-process [`storage::ArchiveStore`] fake that records concurrency
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod paths;
pub mod store;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;
pub use store::RecordingStore;

/// Assert two floats are within `eps` of each other.
///
/// ```ignore
/// assert_approx_eq!(radius, 229_819.07, 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $eps:expr) => {{
        let (l, r, e): (f64, f64, f64) = ($left, $right, $eps);
        assert!(
            (l - r).abs() <= e,
            "assertion failed: |{} - {}| = {} > {}",
            l,
            r,
            (l - r).abs(),
            e
        );
    }};
}

/// Assert two `(lat, lon)` pairs are within `eps` degrees on both axes.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    ($left:expr, $right:expr, $eps:expr) => {{
        let (l, r): ((f64, f64), (f64, f64)) = ($left, $right);
        $crate::assert_approx_eq!(l.0, r.0, $eps);
        $crate::assert_approx_eq!(l.1, r.1, $eps);
    }};
}
