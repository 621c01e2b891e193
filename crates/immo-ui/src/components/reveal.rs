//! Fade-up on first scroll into view

use immo_core::motion::{self, Reveal};
use leptos::html::Div;
use leptos::prelude::*;

use crate::browser;
use crate::state::use_site;

/// Reveals its children once their top edge enters the viewport.
///
/// `index` staggers siblings by 100 ms each; `card` uses the taller rise of
/// listing cards.
#[component]
pub fn RevealOnScroll(
    children: Children,
    #[prop(optional)] index: usize,
    #[prop(optional)] card: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let site = use_site();
    let node = NodeRef::<Div>::new();
    let phase = RwSignal::new(Reveal::Hidden);

    Effect::new(move |_| {
        site.scroll_y.track();
        if phase.get_untracked() == Reveal::Visible {
            return;
        }
        let Some(el) = node.get() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        match browser::viewport_height() {
            Ok(height) if top < height => phase.set(Reveal::Visible),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(%e, "viewport unknown, revealing immediately");
                phase.set(Reveal::Visible);
            }
        }
    });

    let delay = motion::stagger_delay_ms(index);
    let style = move || {
        let resolved = if card {
            motion::card_reveal(phase.get())
        } else {
            motion::reveal(phase.get())
        };
        format!("{} transition-delay: {delay}ms;", resolved.to_css())
    };

    view! {
        <div node_ref=node class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_component_exists() {
        let _component = RevealOnScroll;
    }
}
