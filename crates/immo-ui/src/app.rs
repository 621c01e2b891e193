//! Main application component
//!
//! Parses the embedded configuration, provides the shared [`SiteState`] and
//! tracks the page scroll offset for the header, hero and reveal effects.

use immo_core::config::LoggingConfig;
use immo_core::data::SampleData;
use immo_core::{ResultExt, SiteConfig};
use leptos::ev;
use leptos::prelude::*;

use crate::browser;
use crate::router::AppRouter;
use crate::state::SiteState;
use crate::telemetry;

/// Site configuration compiled into the bundle
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Parse [`SITE_TOML`] and install console tracing at its level.
///
/// A rejected document falls back to defaults; the rejection is logged once
/// the subscriber is up.
#[must_use]
pub fn init_site() -> SiteConfig {
    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let level = parsed
        .as_ref()
        .map_or_else(|_| LoggingConfig::default().level, |c| c.logging.level.clone());
    if let Err(e) = telemetry::init(&level) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    parsed.or_logged("site.toml rejected", SiteConfig::default())
}

/// Root component with router integration
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    match SampleData::load() {
        Ok(data) => {
            let state = SiteState::new(config, data);
            track_scroll(state.scroll_y);
            provide_context(state);
            tracing::info!("site mounted");
            view! { <AppRouter /> }.into_any()
        }
        Err(e) => {
            tracing::error!(%e, "sample data rejected");
            view! {
                <main class="site-error">
                    <h1>"Site momentanément indisponible"</h1>
                </main>
            }
            .into_any()
        }
    }
}

fn track_scroll(scroll_y: RwSignal<f64>) {
    let read = move || match browser::scroll_y() {
        Ok(y) => scroll_y.set(y),
        Err(e) => tracing::debug!(%e, "scroll offset unavailable"),
    };
    read();
    let handle = window_event_listener(ev::scroll, move |_| read());
    on_cleanup(move || handle.remove());
}
