//! Data models for the site

pub mod category;
pub mod market;
pub mod property;
pub mod testimonial;

pub use category::Category;
pub use market::{MarketStat, MarketTrendPoint, Trend, TypeDistribution, TypeShare};
pub use property::Property;
pub use testimonial::Testimonial;
