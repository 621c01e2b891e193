//! Section components of the home page

pub mod contact;
pub mod estimator;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod listing;
pub mod market_trends;
pub mod reveal;
pub mod testimonials;

pub use contact::Contact;
pub use estimator::EstimatorSection;
pub use features::FeatureGrid;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::IconGlyph;
pub use listing::{Listing, PropertyCard};
pub use market_trends::MarketTrends;
pub use reveal::RevealOnScroll;
pub use testimonials::Testimonials;
