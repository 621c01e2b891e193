//! Site configuration.
//!
//! Tunables for the estimator, the carousel, the hero parallax and logging.
//! The UI embeds `site.toml` at build time; every field has a default so a
//! partial or empty document is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub estimator: EstimatorConfig,
    pub carousel: CarouselConfig,
    pub hero: HeroConfig,
    pub header: HeaderConfig,
    pub logging: LoggingConfig,
}

/// Placeholder valuation constants and the simulated processing delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Euros per square metre
    pub base_price_per_m2: f64,
    /// Uplift per room, as a fraction
    pub room_factor: f64,
    /// Simulated processing delay
    #[serde(rename = "delay_ms", with = "duration_ms")]
    pub delay: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_price_per_m2: 3500.0,
            room_factor: 0.05,
            delay: Duration::from_millis(1500),
        }
    }
}

impl EstimatorConfig {
    /// Set the simulated delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Testimonial rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    #[serde(rename = "interval_ms", with = "duration_ms")]
    pub interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(8),
        }
    }
}

/// Hero background parallax factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Background translation per scrolled pixel
    pub translate_factor: f64,
    /// Background position shift, in percent per scrolled pixel
    pub position_factor: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            translate_factor: 0.3,
            position_factor: 0.05,
        }
    }
}

/// Header appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset in pixels past which the header turns opaque
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

/// Trace output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] on malformed TOML and
    /// [`Error::InvalidConfig`] when a value is out of its domain.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the estimator section.
    #[must_use]
    pub fn with_estimator(mut self, estimator: EstimatorConfig) -> Self {
        self.estimator = estimator;
        self
    }

    /// Set the carousel interval.
    #[must_use]
    pub fn with_carousel_interval(mut self, interval: Duration) -> Self {
        self.carousel.interval = interval;
        self
    }

    fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

        if self.carousel.interval.is_zero() {
            return Err(Error::invalid_config("carousel.interval_ms must be positive"));
        }
        if !self.estimator.base_price_per_m2.is_finite()
            || !self.estimator.room_factor.is_finite()
        {
            return Err(Error::invalid_config("estimator constants must be finite"));
        }
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::invalid_config(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Serialization helper for Duration as milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
