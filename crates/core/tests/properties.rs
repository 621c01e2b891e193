//! Property-based tests using proptest.
//!
//! Properties verified:
//! - Carousel index stays in range under any sequence of actions
//! - Automatic advance fires once per full interval of inactivity
//! - The estimate follows the placeholder formula for all inputs
//! - Price formatting keeps every digit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::time::Duration;

use immo_core::estimator::{Condition, ConstructionEra, EstimateInput, Estimator};
use immo_core::format::format_price;
use immo_core::models::Category;
use immo_core::Carousel;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Next,
    Previous,
    Select(usize),
    Elapse(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Previous),
        (0usize..10).prop_map(Action::Select),
        (0u64..30_000).prop_map(Action::Elapse),
    ]
}

proptest! {
    /// Property: no sequence of actions moves the index out of [0, len).
    #[test]
    fn prop_carousel_index_in_range(
        len in 1usize..8,
        actions in prop::collection::vec(action(), 0..64),
    ) {
        let mut carousel = Carousel::new(len, Duration::from_secs(8)).unwrap();
        for action in actions {
            match action {
                Action::Next => { carousel.next(); }
                Action::Previous => { carousel.previous(); }
                Action::Select(i) => {
                    let result = carousel.select(i);
                    prop_assert_eq!(result.is_ok(), i < len);
                }
                Action::Elapse(ms) => { carousel.elapse(Duration::from_millis(ms)); }
            }
            prop_assert!(carousel.index() < len);
        }
    }

    /// Property: idle time advances exactly floor(t / interval) times.
    #[test]
    fn prop_auto_advance_count(len in 1usize..8, total_ms in 0u64..200_000, chunks in 1u64..20) {
        let mut carousel = Carousel::new(len, Duration::from_secs(8)).unwrap();
        let step = total_ms / chunks;
        let mut fired = 0u64;
        for _ in 0..chunks {
            fired += u64::from(carousel.elapse(Duration::from_millis(step)));
        }
        let expected = step * chunks / 8_000;
        prop_assert_eq!(fired, expected);
        prop_assert_eq!(carousel.index(), usize::try_from(expected).unwrap() % len);
    }

    /// Property: estimate = round(3500 * surface * (1 + rooms * 0.05)).
    #[test]
    fn prop_estimate_formula(surface in 0i64..2_000, rooms in 1i64..30) {
        let input = EstimateInput {
            category: Category::Apartment,
            surface_m2: surface,
            rooms,
            construction: ConstructionEra::After2000,
            condition: Condition::Good,
        };
        let estimate = Estimator::default().estimate(&input).euros();
        // 3500 * s * (20 + r) / 20 = 175 * s * (20 + r), exact in integers
        prop_assert_eq!(estimate, 175 * surface * (20 + rooms));
    }

    /// Property: formatting only inserts separators and the currency sign.
    #[test]
    fn prop_format_price_keeps_digits(value in 0i64..10_000_000_000) {
        let formatted = format_price(value);
        let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits, value.to_string());
        prop_assert!(formatted.ends_with(" €"));
    }
}
