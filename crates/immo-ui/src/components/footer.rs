//! Page footer

use immo_core::content::{
    contact_details, copyright, footer_sections, social_icons, Icon, AGENCY_NAME, AGENCY_TAGLINE,
};
use leptos::prelude::*;

use crate::browser;
use crate::components::icons::{self, IconGlyph};

#[component]
pub fn Footer() -> impl IntoView {
    let details = contact_details();
    let year = browser::current_year();
    let [phone, _] = details.phones;
    let [email, _] = details.emails;

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="grid four">
                    <div class="footer-brand">
                        <h3>{AGENCY_NAME}</h3>
                        <p>{AGENCY_TAGLINE}</p>
                        <div class="socials">
                            {social_icons()
                                .map(|icon| view! {
                                    <a href="#" class="social" aria-label=icons::label(icon)>
                                        <IconGlyph icon=icon />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    {footer_sections()
                        .map(|section| view! {
                            <div class="footer-links">
                                <h4>{section.title}</h4>
                                <ul>
                                    {section
                                        .links
                                        .map(|link| view! { <li><a href="#">{link}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="footer-contact">
                    <span><IconGlyph icon=Icon::MapMarker />" "{details.street}", "{details.city}</span>
                    <span><IconGlyph icon=Icon::Phone />" "{phone}</span>
                    <span><IconGlyph icon=Icon::Envelope />" "{email}</span>
                </div>
                <p class="copyright">{copyright(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_component_exists() {
        let _component = Footer;
    }
}
