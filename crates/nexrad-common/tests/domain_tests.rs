//! Tests for BoundingDomain parsing and validation.

use nexrad_common::domain::{BoundingDomain, DomainParseError};
use nexrad_common::NexradError;

// ============================================================================
// from_arg_string tests
// ============================================================================

#[test]
fn test_parse_integer_domain() {
    let domain = BoundingDomain::from_arg_string("1,1,0,0").unwrap();
    assert_eq!(domain.max_lat, 1.0);
    assert_eq!(domain.max_lon, 1.0);
    assert_eq!(domain.min_lat, 0.0);
    assert_eq!(domain.min_lon, 0.0);
}

#[test]
fn test_parse_with_whitespace() {
    let domain = BoundingDomain::from_arg_string(" 41.22, -84.79 ,38.22,-87.79 ").unwrap();
    assert!((domain.max_lon - (-84.79)).abs() < 1e-9);
    assert!((domain.min_lat - 38.22).abs() < 1e-9);
}

#[test]
fn test_parse_too_few_parts() {
    let result = BoundingDomain::from_arg_string("41.22,-84.79,38.22");
    assert!(matches!(result, Err(DomainParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_too_many_parts() {
    let result = BoundingDomain::from_arg_string("1,2,3,4,5");
    assert!(matches!(result, Err(DomainParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_bad_number() {
    let result = BoundingDomain::from_arg_string("41.22,west,38.22,-87.79");
    assert!(matches!(result, Err(DomainParseError::InvalidNumber(ref n)) if n == "west"));
}

#[test]
fn test_parse_error_converts_to_invalid_domain() {
    let err: NexradError = BoundingDomain::from_arg_string("nope").unwrap_err().into();
    assert!(matches!(err, NexradError::InvalidDomain(_)));
}

// ============================================================================
// validate tests
// ============================================================================

#[test]
fn test_validate_ok() {
    let domain = BoundingDomain::new(41.22, -84.79, 38.22, -87.79).with_height(20_000.0);
    assert!(domain.validate().is_ok());
}

#[test]
fn test_validate_degenerate_point_ok() {
    let domain = BoundingDomain::new(0.0, 0.0, 0.0, 0.0);
    assert!(domain.validate().is_ok());
}

#[test]
fn test_validate_inverted_latitude() {
    let domain = BoundingDomain::new(38.0, -84.0, 41.0, -87.0);
    assert!(matches!(domain.validate(), Err(NexradError::InvalidDomain(_))));
}

#[test]
fn test_validate_inverted_longitude() {
    let domain = BoundingDomain::new(41.0, -87.0, 38.0, -84.0);
    assert!(domain.validate().is_err());
}

#[test]
fn test_validate_polar_latitude_rejected() {
    let domain = BoundingDomain::new(86.0, 10.0, 80.0, 0.0);
    assert!(domain.validate().is_err());
}

#[test]
fn test_validate_nan_rejected() {
    let domain = BoundingDomain::new(f64::NAN, 1.0, 0.0, 0.0);
    assert!(domain.validate().is_err());
}

#[test]
fn test_validate_infinite_height_rejected() {
    let domain = BoundingDomain::new(1.0, 1.0, 0.0, 0.0).with_height(f64::INFINITY);
    assert!(domain.validate().is_err());
}

// ============================================================================
// contains_point tests
// ============================================================================

#[test]
fn test_contains_point_edges_inclusive() {
    let domain = BoundingDomain::new(41.0, -84.0, 38.0, -87.0);
    assert!(domain.contains_point(41.0, -84.0));
    assert!(domain.contains_point(38.0, -87.0));
    assert!(domain.contains_point(39.7074962, -86.2803675));
    assert!(!domain.contains_point(41.01, -85.0));
    assert!(!domain.contains_point(40.0, -83.99));
}

#[test]
fn test_display() {
    let domain = BoundingDomain::new(1.5, 2.5, 0.5, 1.0);
    assert_eq!(domain.to_string(), "1.5,2.5 to 0.5,1");
}
