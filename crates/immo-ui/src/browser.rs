//! Thin wrappers over browser APIs

use std::time::Duration;

use async_trait::async_trait;
use immo_core::estimator::Sleep;
use web_sys::window;

use crate::error::{Result, UiError};

/// Vertical scroll offset of the page in CSS pixels
///
/// # Errors
///
/// Returns an error outside a browser or if the property read fails.
pub fn scroll_y() -> Result<f64> {
    let window = window().ok_or(UiError::NoWindow)?;
    window.scroll_y().map_err(|e| UiError::dom("scrollY", &e))
}

/// Viewport height in CSS pixels
///
/// # Errors
///
/// Returns an error outside a browser or if the height is not a number.
pub fn viewport_height() -> Result<f64> {
    let window = window().ok_or(UiError::NoWindow)?;
    let height = window
        .inner_height()
        .map_err(|e| UiError::dom("innerHeight", &e))?;
    height
        .as_f64()
        .ok_or_else(|| UiError::Dom("innerHeight is not a number".to_string()))
}

/// Current calendar year from the browser clock
#[must_use]
pub fn current_year() -> i32 {
    let year = js_sys::Date::new_0().get_full_year();
    i32::try_from(year).unwrap_or(i32::MAX)
}

/// Timer-backed delay for the estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleep;

#[async_trait(?Send)]
impl Sleep for BrowserSleep {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Milliseconds for `gloo_timers` callbacks, saturating at `u32::MAX`
#[must_use]
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(8_000)), 8_000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
