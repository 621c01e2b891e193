#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # immo-core
//!
//! Domain layer for the ImmoPrestige agency site.
//!
//! This crate provides:
//! - Listing, market and testimonial models with the sample data store
//! - Static site copy (navigation, features, footer, contact)
//! - The three-step estimator wizard and the valuation service
//! - The testimonial carousel controller
//! - Style mapping for animated view states and SVG chart geometry
//! - Site configuration loaded from TOML
//!
//! Nothing here touches the DOM; the `immo-ui` crate binds these types to
//! Leptos signals.

pub mod carousel;
pub mod chart;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod estimator;
pub mod format;
pub mod listing;
pub mod models;
pub mod motion;
pub mod result;

// Re-export commonly used items
pub use carousel::{Carousel, Direction};
pub use config::SiteConfig;
pub use error::{Error, WizardError};
pub use estimator::{Estimate, EstimatorWizard, WizardPhase, WizardStep};
pub use listing::ListingFilter;
pub use result::{Result, ResultExt};
