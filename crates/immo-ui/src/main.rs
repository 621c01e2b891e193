//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM. It installs the panic hook and the console
//! subscriber, then mounts [`App`] to the document body.

use immo_ui::app::{App, init_site};
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let config = init_site();
    tracing::info!(level = %config.logging.level, "starting ImmoPrestige");

    mount_to_body(move || {
        view! {
            <App config=config.clone() />
        }
    });
}
