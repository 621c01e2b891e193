//! Property listing and cards

use immo_core::content::Section;
use immo_core::format::{format_price, format_surface};
use immo_core::models::Property;
use immo_core::motion;
use leptos::prelude::*;

use crate::components::RevealOnScroll;
use crate::state::use_site;

/// Filtered grid of sample properties
#[component]
pub fn Listing() -> impl IntoView {
    let site = use_site();
    let filter = site.filter;
    let data = site.data;

    let visible = Memo::new(move |_| {
        filter.with(|f| {
            f.apply(&data.properties)
                .into_iter()
                .cloned()
                .collect::<Vec<Property>>()
        })
    });

    let clear = move |_| filter.set(Default::default());

    view! {
        <section id=Section::Properties.id() class="section properties">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>"Nos biens d'exception"</h2>
                    <p>
                        "Découvrez notre sélection de propriétés premium, sélectionnées pour leur qualité et leur emplacement idéal"
                    </p>
                </RevealOnScroll>
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || view! {
                        <div class="empty-listing">
                            <p>"Aucun bien ne correspond à votre recherche."</p>
                            <button class="button" on:click=clear>"Voir tous nos biens"</button>
                        </div>
                    }
                >
                    <div class="grid three">
                        <For
                            each=move || visible.get()
                            key=|property| property.id
                            children=|property| {
                                let index = usize::try_from(property.id).unwrap_or(0) % 3;
                                view! {
                                    <RevealOnScroll index=index card=true>
                                        <PropertyCard property=property />
                                    </RevealOnScroll>
                                }
                            }
                        />
                    </div>
                </Show>
                <div class="section-footer">
                    <button class="button secondary" on:click=clear>"Voir tous nos biens"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let price = format_price(i64::try_from(property.price).unwrap_or(i64::MAX));
    let surface = format_surface(property.surface);

    view! {
        <article
            class="property-card"
            style=move || motion::hover_lift(hovered.get()).to_css()
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="property-media">
                <img src=property.image.clone() alt=property.title.clone() loading="lazy" />
                <span class="badge">{property.category.label()}</span>
            </div>
            <div class="property-body">
                <h3>{property.title.clone()}</h3>
                <p class="address">{property.address.clone()}</p>
                <p class="price">{price}</p>
                <div class="property-facts">
                    <span title="Chambres">"🛏 " {property.bedrooms}</span>
                    <span title="Salles de bain">"🛁 " {property.bathrooms}</span>
                    <span title="Surface">"📐 " {surface}</span>
                </div>
                <ul class="tags">
                    {property
                        .features
                        .iter()
                        .map(|tag| view! { <li>{tag.clone()}</li> })
                        .collect_view()}
                </ul>
                <button class="button dark">"Voir le détail"</button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_component_exists() {
        let _component = Listing;
    }

    #[test]
    fn test_property_card_component_exists() {
        let _component = PropertyCard;
    }
}
