//! Property listing model

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A property shown in the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub category: Category,
    /// Asking price in euros
    pub price: u64,
    pub address: String,
    /// Living area in square metres
    pub surface: f64,
    pub rooms: u32,
    pub bathrooms: u32,
    pub bedrooms: u32,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
}

impl Property {
    /// Creates a property with the identifying fields; the rest start empty.
    pub fn new(id: u32, title: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            price: 0,
            address: String::new(),
            surface: 0.0,
            rooms: 0,
            bathrooms: 0,
            bedrooms: 0,
            description: String::new(),
            features: Vec::new(),
            image: String::new(),
        }
    }

    /// Builder pattern: set price
    #[must_use]
    pub const fn with_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    /// Builder pattern: set address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builder pattern: set surface, room, bathroom and bedroom counts
    #[must_use]
    pub const fn with_layout(mut self, surface: f64, rooms: u32, bathrooms: u32, bedrooms: u32) -> Self {
        self.surface = surface;
        self.rooms = rooms;
        self.bathrooms = bathrooms;
        self.bedrooms = bedrooms;
        self
    }

    /// Builder pattern: set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder pattern: set feature tags
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Builder pattern: set image reference
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Case-insensitive match on title, address or description
    #[must_use]
    pub fn matches_search(&self, search_term: &str) -> bool {
        let needle = search_term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.title, &self.address, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Price per square metre, rounded; `None` when the surface is not positive
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn price_per_m2(&self) -> Option<u64> {
        if self.surface > 0.0 {
            Some((self.price as f64 / self.surface).round() as u64)
        } else {
            None
        }
    }
}
