//! Hero banner: parallax background, search box and category chips
//!
//! The search box and chips drive the listing filter held in context.

use std::time::Duration;

use immo_core::content::Section;
use immo_core::data::hero_image;
use immo_core::models::Category;
use immo_core::motion::{self, Reveal};
use leptos::prelude::*;

use crate::state::use_site;

const ENTRANCE_DELAY: Duration = Duration::from_millis(20);

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();
    let hero = site.config.hero;
    let filter = site.filter;
    let background = format!("background-image: url(\"{}\");", hero_image());

    let parallax = move || {
        let offsets = motion::parallax(site.scroll_y.get(), &hero);
        format!("{background} {}", offsets.to_css())
    };

    // Entrance animation plays once, after the hidden style has painted.
    let entrance = RwSignal::new(Reveal::Hidden);
    set_timeout(move || entrance.set(Reveal::Visible), ENTRANCE_DELAY);
    let text_style = move || motion::reveal(entrance.get()).to_css();
    let search_style = move || {
        format!(
            "{} transition-delay: 600ms;",
            motion::reveal(entrance.get()).to_css()
        )
    };

    let on_query = move |ev| {
        let query = event_target_value(&ev);
        filter.update(|f| f.query = query);
    };

    view! {
        <section id="hero" class="hero">
            <div class="hero-background" style=parallax></div>
            <div class="hero-overlay"></div>
            <div class="hero-content container">
                <h1 style=text_style>
                    "Trouvez le bien immobilier " <br />
                    <span class="accent">"de vos rêves"</span>
                </h1>
                <p class="hero-tagline" style=text_style>
                    "Une expertise immobilière à votre service pour concrétiser tous vos projets"
                </p>
                <div class="hero-search" style=search_style>
                    <input
                        type="text"
                        placeholder="Où souhaitez-vous habiter ?"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=on_query
                    />
                    <a class="button primary" href=Section::Properties.href()>"⌕ Rechercher"</a>
                </div>
                <div class="hero-chips" style=text_style>
                    {Category::LISTED
                        .into_iter()
                        .map(|category| {
                            let active = move || filter.with(|f| f.category == Some(category));
                            view! {
                                <button
                                    class="chip"
                                    class:active=active
                                    on:click=move |_| filter.update(|f| f.toggle_category(category))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <a class="scroll-hint" href=Section::Properties.href()>
                <span>"Découvrir"</span>
                <span class="bounce">"↓"</span>
            </a>
        </section>
    }
}
