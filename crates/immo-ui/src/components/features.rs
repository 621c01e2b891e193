//! "Pourquoi nous choisir ?" feature grid

use immo_core::content::{features, Feature, Section, AGENCY_NAME};
use immo_core::motion;
use leptos::prelude::*;

use crate::components::{IconGlyph, RevealOnScroll};

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="section features">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>"Pourquoi nous choisir ?"</h2>
                    <p>
                        {AGENCY_NAME}
                        " vous accompagne dans tous vos projets immobiliers avec une expertise reconnue et des outils innovants"
                    </p>
                </RevealOnScroll>
                <div class="grid four">
                    {features()
                        .into_iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <RevealOnScroll index=index>
                                <FeatureCard feature=feature />
                            </RevealOnScroll>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let hovered = RwSignal::new(false);
    view! {
        <div
            class="feature-card"
            style=move || motion::hover_lift(hovered.get()).to_css()
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="feature-icon">
                <IconGlyph icon=feature.icon />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_grid_component_exists() {
        let _component = FeatureGrid;
    }
}
