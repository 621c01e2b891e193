//! Property category enumeration

use serde::{Deserialize, Serialize};

/// Kind of property.
///
/// Listings and the market distribution use the first four variants; the
/// estimator also accepts studios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apartment,
    House,
    Villa,
    Loft,
    Studio,
}

impl Category {
    /// Categories shown in listings, hero quick picks and the distribution chart.
    pub const LISTED: [Self; 4] = [Self::Apartment, Self::House, Self::Villa, Self::Loft];

    /// Categories offered by the estimator's first step.
    pub const ESTIMABLE: [Self; 5] = [
        Self::Apartment,
        Self::House,
        Self::Villa,
        Self::Loft,
        Self::Studio,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Appartement",
            Self::House => "Maison",
            Self::Villa => "Villa",
            Self::Loft => "Loft",
            Self::Studio => "Studio",
        }
    }

    /// Plural label used by chart legends
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Apartment => "Appartements",
            Self::House => "Maisons",
            Self::Villa => "Villas",
            Self::Loft => "Lofts",
            Self::Studio => "Studios",
        }
    }

    /// Stable machine key, also used as form values and DOM ids
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Villa => "villa",
            Self::Loft => "loft",
            Self::Studio => "studio",
        }
    }

    /// Parse a machine key or display label.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ESTIMABLE
            .into_iter()
            .find(|c| c.key() == value || c.label() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_key_and_label() {
        assert_eq!(Category::parse("house"), Some(Category::House));
        assert_eq!(Category::parse("Maison"), Some(Category::House));
        assert_eq!(Category::parse("Studio"), Some(Category::Studio));
        assert_eq!(Category::parse("castle"), None);
    }

    #[test]
    fn test_listed_excludes_studio() {
        assert!(!Category::LISTED.contains(&Category::Studio));
        assert!(Category::ESTIMABLE.contains(&Category::Studio));
    }

    #[test]
    fn test_serialization_uses_lowercase_keys() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Category::Apartment)?;
        assert_eq!(json, r#""apartment""#);
        Ok(())
    }
}
