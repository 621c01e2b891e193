//! Browser tests for the DOM wrappers
//!
//! Run with `wasm-pack test --headless --firefox crates/immo-ui`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use immo_core::estimator::Sleep;
use wasm_bindgen_test::*;

use crate::browser::{current_year, scroll_y, viewport_height, BrowserSleep};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_scroll_offset_readable() {
    let y = scroll_y().unwrap();
    assert!(y >= 0.0);
}

#[wasm_bindgen_test]
fn test_viewport_has_height() {
    assert!(viewport_height().unwrap() > 0.0);
}

#[wasm_bindgen_test]
fn test_current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

#[wasm_bindgen_test]
async fn test_browser_sleep_resolves() {
    BrowserSleep.sleep(Duration::from_millis(5)).await;
}
