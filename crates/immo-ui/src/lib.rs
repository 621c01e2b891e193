//! Leptos 0.7 CSR front end for the ImmoPrestige agency site
//!
//! A single scrolling page: header, hero search, featured listings, the
//! online estimator, market charts, testimonials, contact and footer. All
//! behaviour lives in `immo-core`; this crate binds it to signals and the
//! DOM.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), bundled by Trunk
//! - Shared [`state::SiteState`] provided through context
//! - `tracing` events routed to the browser console
//!
//! ## Module Structure
//! - `app`: root component and configuration bootstrap
//! - `router`: route definitions
//! - `pages`: home and not-found pages
//! - `components`: one component per page section
//! - `browser`: scroll, viewport, clock and timer wrappers
//! - `telemetry`: console subscriber
//! - `error`: browser-side error type

#![forbid(unsafe_code)]

pub mod app;
pub mod browser;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod browser_test;
#[cfg(test)]
mod tests;

pub use app::App;

#[cfg(test)]
mod module_tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _app = App;
        let _home = pages::Home;
        let _not_found = pages::NotFound;
        assert_eq!(router::routes::HOME, "/");
    }

    #[test]
    fn test_error_types() {
        let err = error::UiError::Dom("innerHeight: denied".to_string());
        assert!(err.to_string().contains("DOM call failed"));
    }

    #[test]
    fn test_section_components() {
        let _header = components::Header;
        let _hero = components::Hero;
        let _features = components::FeatureGrid;
        let _listing = components::Listing;
        let _estimator = components::EstimatorSection;
        let _trends = components::MarketTrends;
        let _testimonials = components::Testimonials;
        let _contact = components::Contact;
        let _footer = components::Footer;
    }
}
