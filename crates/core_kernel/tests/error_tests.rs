//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::amount::AmountError;
use core_kernel::temporal::{parse_lease_date, TemporalError};
use core_kernel::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Rental not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Rental not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_from_amount_error() {
    let amount_error = AmountError::InvalidAmount("abc".to_string());
    let core_error: CoreError = amount_error.into();

    assert!(matches!(core_error, CoreError::Amount(_)));
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal_error = parse_lease_date("31/02/2024").unwrap_err();
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(TemporalError::InvalidDate(_))));
    assert!(core_error.to_string().contains("31/02/2024"));
}

#[test]
fn test_port_error_classification() {
    let missing = PortError::not_found("Rental", "RNT-1");
    assert!(missing.is_not_found());
    assert!(!missing.is_transient());
    assert_eq!(missing.to_string(), "Not found: Rental with id RNT-1");

    let offline = PortError::connection("store unreachable");
    assert!(offline.is_transient());
    assert!(!offline.is_not_found());
}

#[test]
fn test_port_error_validation_field() {
    match PortError::validation_field("must not be empty", "email") {
        PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("email")),
        _ => panic!("Expected Validation error"),
    }
}
