//! Behavioral tests for the testimonial carousel

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use immo_core::config::SiteConfig;
use immo_core::data;
use immo_core::{Carousel, Direction, Error};

fn testimonial_carousel() -> Carousel {
    let config = SiteConfig::default();
    Carousel::new(data::testimonials().len(), config.carousel.interval).unwrap()
}

#[test]
fn given_three_testimonials_when_created_then_first_is_shown() {
    let carousel = testimonial_carousel();

    assert_eq!(carousel.len(), 3);
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.time_until_advance(), Duration::from_secs(8));
}

#[test]
fn given_idle_visitor_when_eight_seconds_pass_then_advances_once() {
    // Given
    let mut carousel = testimonial_carousel();

    // When
    let fired = carousel.elapse(Duration::from_secs(8));

    // Then
    assert_eq!(fired, 1);
    assert_eq!(carousel.index(), 1);
    assert_eq!(carousel.direction(), Direction::Forward);
}

#[test]
fn given_manual_navigation_when_timer_running_then_countdown_restarts() {
    // Given
    let mut carousel = testimonial_carousel();
    carousel.elapse(Duration::from_secs(6));

    // When
    carousel.previous();
    let fired = carousel.elapse(Duration::from_secs(6));

    // Then
    assert_eq!(fired, 0);
    assert_eq!(carousel.index(), 2);
    assert_eq!(carousel.time_until_advance(), Duration::from_secs(2));
}

#[test]
fn given_dot_click_when_selecting_lower_index_then_direction_backward() {
    // Given
    let mut carousel = testimonial_carousel();
    carousel.next();
    carousel.next();

    // When
    carousel.select(0).unwrap();

    // Then
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.direction(), Direction::Backward);
}

#[test]
fn given_no_testimonials_when_creating_carousel_then_error() {
    let result = Carousel::new(0, Duration::from_secs(8));

    assert_eq!(result, Err(Error::EmptyCarousel));
}

#[test]
fn given_last_slide_when_next_then_wraps_to_first() {
    let mut carousel = testimonial_carousel();
    carousel.select(2).unwrap();

    assert_eq!(carousel.next(), 0);
    assert_eq!(carousel.previous(), 2);
}

#[test]
fn given_tab_left_in_background_when_huge_time_passes_then_index_stays_in_range() {
    // Given
    let mut carousel = testimonial_carousel();
    carousel.elapse(Duration::from_secs(1));

    // When
    let fired = carousel.elapse(Duration::MAX);

    // Then
    assert_eq!(fired, u32::MAX);
    assert!(carousel.index() < carousel.len());
    assert_eq!(carousel.direction(), Direction::Forward);
}
