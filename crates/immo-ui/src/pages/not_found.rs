//! 404 page

use leptos::prelude::*;

use crate::router::routes;

/// Shown for any path other than the home page
#[component]
pub fn NotFound() -> impl IntoView {
    tracing::debug!("unknown route");
    view! {
        <div class="not-found-page">
            <h1>"404 - Page introuvable"</h1>
            <p>"La page que vous recherchez n'existe pas."</p>
            <a href=routes::HOME>"Retour à l'accueil"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
