//! Shared reactive state provided at the root of the app

use std::sync::Arc;

use immo_core::data::SampleData;
use immo_core::{ListingFilter, SiteConfig};
use leptos::prelude::*;

/// Everything sections read from context
#[derive(Debug, Clone)]
pub struct SiteState {
    pub config: Arc<SiteConfig>,
    pub data: Arc<SampleData>,
    /// Page scroll offset, updated by a single window listener
    pub scroll_y: RwSignal<f64>,
    /// Listing filter driven by the hero search box and chips
    pub filter: RwSignal<ListingFilter>,
}

impl SiteState {
    #[must_use]
    pub fn new(config: SiteConfig, data: SampleData) -> Self {
        Self {
            config: Arc::new(config),
            data: Arc::new(data),
            scroll_y: RwSignal::new(0.0),
            filter: RwSignal::new(ListingFilter::default()),
        }
    }
}

/// Site state from context. Must be called below [`crate::App`].
#[must_use]
pub fn use_site() -> SiteState {
    expect_context::<SiteState>()
}
