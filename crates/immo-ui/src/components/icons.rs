//! Icon rendering
//!
//! Icons are plain glyphs so the bundle ships without an icon font.

use immo_core::content::Icon;
use leptos::prelude::*;

/// Glyph shown for an icon
#[must_use]
pub const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Building => "▦",
        Icon::Search => "⌕",
        Icon::Info => "ℹ",
        Icon::Blog => "✎",
        Icon::UserPlus => "✉",
        Icon::ChartLine => "📈",
        Icon::ChartPie => "◔",
        Icon::Star => "★",
        Icon::MapMarker => "⌖",
        Icon::Phone => "☎",
        Icon::Envelope => "✉",
        Icon::Facebook => "f",
        Icon::Twitter => "𝕏",
        Icon::Instagram => "◎",
        Icon::LinkedIn => "in",
    }
}

/// Accessible name for icon-only links
#[must_use]
pub const fn label(icon: Icon) -> &'static str {
    match icon {
        Icon::Facebook => "Facebook",
        Icon::Twitter => "Twitter",
        Icon::Instagram => "Instagram",
        Icon::LinkedIn => "LinkedIn",
        Icon::Phone => "Téléphone",
        Icon::Envelope => "Email",
        Icon::MapMarker => "Adresse",
        _ => "",
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <span class=format!("icon {class}") aria-hidden="true">{glyph(icon)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use immo_core::content::social_icons;

    #[test]
    fn test_social_icons_have_labels() {
        assert!(social_icons().iter().all(|icon| !label(*icon).is_empty()));
    }

    #[test]
    fn test_icon_component_exists() {
        let _component = IconGlyph;
    }
}
