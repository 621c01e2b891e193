//! Listing filters driven by the hero search box and category chips

use serde::{Deserialize, Serialize};

use crate::models::{Category, Property};

/// Active listing filters; the default shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub query: String,
}

impl ListingFilter {
    /// Check if a property matches all active filters
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        let category_match = self.category.is_none_or(|c| c == property.category);
        category_match && property.matches_search(&self.query)
    }

    /// Properties that pass the filter, in their original order
    #[must_use]
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }

    /// Toggle a category chip: picking the active category clears it.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
        tracing::debug!(category = ?self.category, "listing category filter");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.query.trim().is_empty()
    }
}
