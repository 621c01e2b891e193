//! Fixed site header with anchor navigation and a mobile menu

use immo_core::content::{nav_items, Icon, NavItem, AGENCY_NAME};
use immo_core::motion;
use leptos::prelude::*;

use crate::components::IconGlyph;
use crate::state::use_site;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let threshold = site.config.header.scroll_threshold;
    let scrolled = Memo::new(move |_| motion::header_scrolled(site.scroll_y.get(), threshold));
    let menu_open = RwSignal::new(false);

    let toggle_menu = move |_| {
        menu_open.update(|open| *open = !*open);
        tracing::debug!(open = menu_open.get_untracked(), "mobile menu toggled");
    };

    view! {
        <header
            class="site-header"
            class:scrolled=move || scrolled.get()
            style=move || motion::header_css(scrolled.get())
        >
            <div class="container header-bar">
                <a class="brand" href="#">
                    <IconGlyph icon=Icon::Home class="brand-icon" />
                    <span class="brand-name">{AGENCY_NAME}</span>
                </a>
                <nav class="desktop-nav">
                    {nav_items().into_iter().map(|item| nav_link(item, None)).collect_view()}
                </nav>
                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="mobile-nav container">
                    {nav_items()
                        .into_iter()
                        .map(|item| nav_link(item, Some(menu_open)))
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

/// Anchor link; in the mobile menu a click also closes the menu.
fn nav_link(item: NavItem, close: Option<RwSignal<bool>>) -> impl IntoView {
    let on_click = move |_| {
        if let Some(menu_open) = close {
            menu_open.set(false);
        }
    };
    view! {
        <a class="nav-link" href=item.target.href() on:click=on_click>
            <IconGlyph icon=item.icon />
            <span>{item.label}</span>
        </a>
    }
}
