//! Behavioral tests for header navigation and in-page anchors

use immo_core::content::{nav_items, Section};
use immo_core::motion;

use crate::router::routes;

// ============================================================================
// ANCHOR BEHAVIORS
// ============================================================================

#[test]
fn given_nav_items_when_rendered_then_each_links_to_an_anchor() {
    // Given
    let items = nav_items();

    // When
    let hrefs: Vec<String> = items.iter().map(|item| item.target.href()).collect();

    // Then
    assert_eq!(hrefs.first().map(String::as_str), Some("#"));
    assert!(hrefs.iter().all(|href| href.starts_with('#')));
    assert!(hrefs.contains(&"#estimator".to_string()));
    assert!(hrefs.contains(&"#contact".to_string()));
}

#[test]
fn given_contact_button_when_estimate_done_then_targets_contact_section() {
    assert_eq!(Section::Contact.href(), format!("#{}", Section::Contact.id()));
}

#[test]
fn given_site_when_routing_then_home_is_the_root_path() {
    assert_eq!(routes::HOME, "/");
}

// ============================================================================
// HEADER BEHAVIORS
// ============================================================================

#[test]
fn given_page_top_when_not_scrolled_then_header_is_transparent() {
    // Given
    let threshold = 50.0;

    // When
    let scrolled = motion::header_scrolled(0.0, threshold);

    // Then
    assert!(!scrolled);
    assert_eq!(motion::header_css(scrolled), motion::header_css(false));
}

#[test]
fn given_threshold_when_exactly_reached_then_header_stays_transparent() {
    assert!(!motion::header_scrolled(50.0, 50.0));
    assert!(motion::header_scrolled(50.5, 50.0));
}
