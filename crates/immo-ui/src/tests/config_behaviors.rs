//! Behavioral tests for the embedded site configuration and telemetry setup

use std::time::Duration;

use immo_core::SiteConfig;

use crate::app::SITE_TOML;
use crate::browser;
use crate::error::UiError;
use crate::telemetry;

#[test]
fn given_embedded_toml_when_parsed_then_matches_shipped_defaults() -> immo_core::Result<()> {
    // Given
    let document = SITE_TOML;

    // When
    let config = SiteConfig::from_toml_str(document)?;

    // Then
    assert_eq!(config, SiteConfig::default());
    Ok(())
}

#[test]
fn given_carousel_interval_when_armed_as_timeout_then_milliseconds_match() -> immo_core::Result<()> {
    // Given
    let config = SiteConfig::from_toml_str(SITE_TOML)?;

    // When
    let millis = browser::millis(config.carousel.interval);

    // Then
    assert_eq!(millis, 8_000);
    Ok(())
}

#[test]
fn given_huge_duration_when_converted_then_saturates() {
    assert_eq!(browser::millis(Duration::from_secs(u64::MAX)), u32::MAX);
}

#[test]
fn given_unknown_level_when_initialising_telemetry_then_error() {
    // When
    let result = telemetry::init("chatty");

    // Then
    assert!(matches!(result, Err(UiError::Telemetry(_))));
}
