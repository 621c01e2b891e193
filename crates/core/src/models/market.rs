//! Market figures: monthly price trend, property type shares and headline stats

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::Error;
use crate::result::Result;

/// Average price per square metre for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrendPoint {
    pub month: String,
    /// Euros per square metre
    pub price_per_m2: u32,
}

impl MarketTrendPoint {
    pub fn new(month: impl Into<String>, price_per_m2: u32) -> Self {
        Self {
            month: month.into(),
            price_per_m2,
        }
    }
}

/// One category's share of the local market, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShare {
    pub category: Category,
    pub percent: u32,
}

/// Share of each property category, in display order.
///
/// Shares may leave part of the market unaccounted for, but never claim more
/// than the whole of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDistribution {
    shares: Vec<TypeShare>,
}

impl TypeDistribution {
    /// Build a distribution from `(category, percent)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DistributionOverflow`] when the shares add up to more
    /// than 100%.
    pub fn new<I>(shares: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        let shares: Vec<TypeShare> = shares
            .into_iter()
            .map(|(category, percent)| TypeShare { category, percent })
            .collect();
        let total = shares
            .iter()
            .fold(0_u32, |acc, s| acc.saturating_add(s.percent));
        if total > 100 {
            return Err(Error::DistributionOverflow { total });
        }
        Ok(Self { shares })
    }

    /// Shares in display order
    #[must_use]
    pub fn shares(&self) -> &[TypeShare] {
        &self.shares
    }

    /// Sum of all shares, at most 100
    #[must_use]
    pub fn total(&self) -> u32 {
        self.shares.iter().map(|s| s.percent).sum()
    }

    /// Share for a category, 0 when absent
    #[must_use]
    pub fn percent_of(&self, category: Category) -> u32 {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map_or(0, |s| s.percent)
    }
}

/// Direction a market statistic is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// CSS modifier class for the value colour
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
            Self::Stable => "trend-stable",
        }
    }
}

/// Headline market figure shown under the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStat {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

impl MarketStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>, trend: Trend) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend,
        }
    }
}
