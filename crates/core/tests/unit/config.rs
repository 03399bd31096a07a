//! # Configuration Tests
//!
//! Tests for configuration defaults, validation, page-shift derivation, and
//! JSON deserialization.

use tlbsim_core::common::SimError;
use tlbsim_core::config::Config;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.capacity, 32);
    assert_eq!(config.page_size_kib, 4);
}

#[test]
fn with_capacity_keeps_default_page_size() {
    let config = Config::with_capacity(8);
    assert_eq!(config.capacity, 8);
    assert_eq!(config.page_size_kib, 4);
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn zero_capacity_invalid() {
    let config = Config::with_capacity(0);
    assert!(matches!(
        config.validate(),
        Err(SimError::InvalidCapacity { got: 0 })
    ));
}

#[test]
fn page_size_must_be_power_of_two() {
    for bad in [0, 3, 6, 100] {
        let config = Config {
            capacity: 4,
            page_size_kib: bad,
        };
        assert!(
            matches!(config.validate(), Err(SimError::InvalidPageSize { got }) if got == bad),
            "page size {bad} KiB should be rejected"
        );
    }
}

/// `page_shift = log2(page_size_kib) + 10`: 4 KiB pages shift by 12.
#[test]
fn page_shift_derivation() {
    let shifts = [(1, 10), (4, 12), (16, 14), (1024, 20)];
    for (page_size_kib, shift) in shifts {
        let config = Config {
            capacity: 4,
            page_size_kib,
        };
        assert_eq!(config.page_shift(), shift, "{page_size_kib} KiB pages");
    }
}

#[test]
fn deserializes_from_json() {
    let parsed: Result<Config, _> = serde_json::from_str(r#"{"capacity":8,"page_size_kib":16}"#);
    assert_eq!(
        parsed.ok(),
        Some(Config {
            capacity: 8,
            page_size_kib: 16
        })
    );
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed: Result<Config, _> = serde_json::from_str(r#"{"capacity":2}"#);
    assert_eq!(
        parsed.ok(),
        Some(Config {
            capacity: 2,
            page_size_kib: 4
        })
    );
}

#[test]
fn unknown_fields_rejected() {
    let parsed: Result<Config, _> = serde_json::from_str(r#"{"ways":4}"#);
    assert!(parsed.is_err());
}
