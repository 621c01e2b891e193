//! Router configuration
//!
//! The site is a single page; every other path renders the not-found view.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
            </Routes>
        </Router>
    }
}
