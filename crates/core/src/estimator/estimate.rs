//! Valuation formula and the simulated processing delay.
//!
//! The formula is a placeholder:
//! `round(base_price_per_m2 * surface * (1 + rooms * room_factor))`.
//! No market data is consulted.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::form::{Condition, ConstructionEra, EstimatorForm};
use crate::config::EstimatorConfig;
use crate::format::format_price;
use crate::models::Category;

/// Estimated value in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Estimate(i64);

impl Estimate {
    #[must_use]
    pub const fn new(euros: i64) -> Self {
        Self(euros)
    }

    #[must_use]
    pub const fn euros(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_price(self.0))
    }
}

/// Inputs captured at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub category: Category,
    pub surface_m2: i64,
    pub rooms: i64,
    pub construction: ConstructionEra,
    pub condition: Condition,
}

impl EstimateInput {
    /// Interpret a completed form.
    ///
    /// Surface and rooms are read as leading integers, so `"80.5"` reads as
    /// 80. An unreadable surface counts as 0; an unreadable or zero room
    /// count counts as 1. Returns `None` if a selection is missing.
    #[must_use]
    pub fn from_form(form: &EstimatorForm) -> Option<Self> {
        Some(Self {
            category: form.category()?,
            surface_m2: parse_leading_int(form.surface()).unwrap_or(0),
            rooms: parse_leading_int(form.rooms())
                .filter(|n| *n != 0)
                .unwrap_or(1),
            construction: form.construction()?,
            condition: form.condition()?,
        })
    }
}

/// Read an optionally signed run of digits after leading whitespace,
/// ignoring whatever follows. A run too long for `i64` saturates.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, trimmed.get(1..)?),
        Some(b'+') => (1, trimmed.get(1..)?),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let run = digits.get(..end)?;
    if run.is_empty() {
        return None;
    }
    let magnitude = run.parse::<i64>().unwrap_or(i64::MAX);
    Some(magnitude.saturating_mul(sign))
}

/// Deferred completion used to simulate the valuation taking time.
///
/// The browser build sleeps on a JS timer; tests use [`NoDelay`] or a
/// recording sleeper.
#[async_trait(?Send)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Sleep for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Computes estimates from the configured constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    #[must_use]
    pub const fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.config.delay
    }

    /// Apply the formula, rounding halves up.
    ///
    /// Non-positive surfaces are not rejected; they yield zero or negative
    /// values and are reported at warn level.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn estimate(&self, input: &EstimateInput) -> Estimate {
        if input.surface_m2 <= 0 || input.rooms < 0 {
            tracing::warn!(
                surface = input.surface_m2,
                rooms = input.rooms,
                "estimating with a non-positive surface or negative room count"
            );
        }
        let surface = input.surface_m2 as f64;
        let rooms = input.rooms as f64;
        let raw = self.config.base_price_per_m2 * surface * (1.0 + rooms * self.config.room_factor);
        let euros = (raw + 0.5).floor() as i64;
        tracing::debug!(
            category = %input.category,
            construction = input.construction.label(),
            condition = input.condition.label(),
            euros,
            "estimate computed"
        );
        Estimate(euros)
    }

    /// Wait for the configured delay, then compute.
    pub async fn run<S: Sleep + ?Sized>(&self, sleeper: &S, input: EstimateInput) -> Estimate {
        sleeper.sleep(self.config.delay).await;
        self.estimate(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(surface_m2: i64, rooms: i64) -> EstimateInput {
        EstimateInput {
            category: Category::Apartment,
            surface_m2,
            rooms,
            construction: ConstructionEra::After2000,
            condition: Condition::Good,
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("80"), Some(80));
        assert_eq!(parse_leading_int("  80.5"), Some(80));
        assert_eq!(parse_leading_int("12m2"), Some(12));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_parse_leading_int_saturates_on_overflow() {
        assert_eq!(parse_leading_int("12345678901234567890"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999 m2"), Some(-i64::MAX));
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_eighty_square_metres_three_rooms() {
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate(&input(80, 3)), Estimate::new(322_000));
    }

    #[test]
    fn test_zero_surface_gives_zero() {
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate(&input(0, 4)), Estimate::new(0));
    }

    #[test]
    fn test_negative_surface_is_not_rejected() {
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate(&input(-10, 0)), Estimate::new(-35_000));
    }

    #[test]
    fn test_estimate_display_groups_thousands() {
        assert_eq!(Estimate::new(437_500).to_string(), "437 500 €");
    }

    #[tokio::test]
    async fn test_run_with_no_delay() {
        let estimator = Estimator::default();
        let result = estimator.run(&NoDelay, input(100, 5)).await;
        assert_eq!(result.euros(), 437_500);
    }
}
