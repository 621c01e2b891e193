//! Contact section: message form and agency details

use immo_core::content::{contact_details, ContactDetails, Icon, Section};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{IconGlyph, RevealOnScroll};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section contact">
            <div class="container">
                <RevealOnScroll class="section-heading">
                    <h2>"Contactez-nous"</h2>
                    <p>
                        "Notre équipe d'experts est à votre disposition pour répondre à toutes vos questions"
                    </p>
                </RevealOnScroll>
                <div class="grid two">
                    <RevealOnScroll>
                        <ContactForm />
                    </RevealOnScroll>
                    <RevealOnScroll index=1>
                        <ContactInfo details=contact_details() />
                    </RevealOnScroll>
                </div>
            </div>
        </section>
    }
}

/// Message form. There is no backend; a submission is logged and the
/// fields are cleared.
#[component]
fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::info!(
            subject = %subject.get_untracked(),
            chars = message.with_untracked(String::len),
            "contact message submitted"
        );
        for field in [name, email, subject, message] {
            field.set(String::new());
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h3>"Envoyez-nous un message"</h3>
            <div class="field-row">
                <div class="field">
                    <label for="contact-name">"Nom"</label>
                    <input
                        id="contact-name"
                        type="text"
                        required
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        type="email"
                        required
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="field">
                <label for="contact-subject">"Sujet"</label>
                <input
                    id="contact-subject"
                    type="text"
                    prop:value=subject
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    required
                    prop:value=message
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="button primary wide">"Envoyer"</button>
        </form>
    }
}

#[component]
fn ContactInfo(details: ContactDetails) -> impl IntoView {
    view! {
        <div class="contact-info">
            <div class="info-block">
                <IconGlyph icon=Icon::MapMarker class="accent" />
                <div>
                    <h4>"Notre adresse"</h4>
                    <p>{details.street}</p>
                    <p>{details.city}</p>
                </div>
            </div>
            <div class="info-block">
                <IconGlyph icon=Icon::Phone class="accent" />
                <div>
                    <h4>"Téléphone"</h4>
                    {details.phones.map(|phone| view! { <p>{phone}</p> }).collect_view()}
                </div>
            </div>
            <div class="info-block">
                <IconGlyph icon=Icon::Envelope class="accent" />
                <div>
                    <h4>"Email"</h4>
                    {details
                        .emails
                        .map(|email| view! { <p><a href=format!("mailto:{email}")>{email}</a></p> })
                        .collect_view()}
                </div>
            </div>
            <div class="info-block hours">
                <h4>"Horaires d'ouverture"</h4>
                {details.hours.map(|line| view! { <p>{line}</p> }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_component_exists() {
        let _component = Contact;
    }
}
