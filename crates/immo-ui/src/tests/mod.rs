//! Behavioral tests for the site shell
//!
//! BDD-style tests using given-when-then naming. They exercise the logic the
//! components bind to, without a DOM.

pub mod config_behaviors;
pub mod navigation_behaviors;
