//! Filter state applied to the catalog.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TastebudError};
use crate::restaurant::PriceTier;
use crate::user::UserProfile;

/// Longest search query, in characters, considered when matching.
pub const MAX_QUERY_CHARS: usize = 100;

/// Inclusive price bounds with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    low: u32,
    high: u32,
}

impl PriceBounds {
    /// Budget slider range used before a profile is loaded.
    pub const DEFAULT: PriceBounds = PriceBounds {
        low: 50,
        high: 2000,
    };

    /// Creates bounds, rejecting `low > high`.
    pub fn new(low: u32, high: u32) -> Result<Self> {
        if low > high {
            return Err(TastebudError::validation(
                "price",
                format!("lower bound {low} exceeds upper bound {high}"),
            ));
        }
        Ok(Self { low, high })
    }

    /// Bounds covering every price, `[0, u32::MAX]`.
    pub const fn unbounded() -> Self {
        Self {
            low: 0,
            high: u32::MAX,
        }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The query the user is currently applying to the Discover feed.
///
/// Mutations are synchronous; the owner is responsible for rebuilding the
/// candidate queue afterwards (see `crate::discovery::Discovery`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    selected_tags: Vec<String>,
    price: PriceBounds,
    query: String,
    price_tiers: Vec<PriceTier>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_tags: Vec::new(),
            price: PriceBounds::DEFAULT,
            query: String::new(),
            price_tiers: Vec::new(),
        }
    }
}

impl FilterState {
    /// A filter that lets every record through.
    pub fn unrestricted() -> Self {
        Self {
            price: PriceBounds::unbounded(),
            ..Self::default()
        }
    }

    /// Seeds the filter from stored preferences.
    ///
    /// Taste tags become the selected tags and the budget becomes the price
    /// bounds. An inverted budget falls back to the default bounds.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut filter = Self::default();
        filter.set_selected_tags(profile.taste_profile.iter().cloned());
        filter.price =
            PriceBounds::new(profile.budget_min, profile.budget_max).unwrap_or_default();
        filter
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn price(&self) -> PriceBounds {
        self.price
    }

    /// The raw query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn price_tiers(&self) -> &[PriceTier] {
        &self.price_tiers
    }

    /// Replaces the selected tags, dropping duplicates and keeping order.
    pub fn set_selected_tags(&mut self, tags: impl IntoIterator<Item = String>) {
        self.selected_tags.clear();
        for tag in tags {
            if !self.selected_tags.contains(&tag) {
                self.selected_tags.push(tag);
            }
        }
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn set_price(&mut self, price: PriceBounds) {
        self.price = price;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds the tier if absent, removes it if present.
    pub fn toggle_price_tier(&mut self, tier: PriceTier) {
        if let Some(pos) = self.price_tiers.iter().position(|t| *t == tier) {
            self.price_tiers.remove(pos);
        } else {
            self.price_tiers.push(tier);
        }
    }

    /// The query as matched: trimmed, lowercased, capped at
    /// [`MAX_QUERY_CHARS`] characters.
    pub fn normalized_query(&self) -> String {
        self.query
            .trim()
            .to_lowercase()
            .chars()
            .take(MAX_QUERY_CHARS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_bounds_reject_inverted() {
        assert!(PriceBounds::new(300, 100).is_err());
        assert!(PriceBounds::new(100, 100).is_ok());
    }

    #[test]
    fn test_toggle_tag() {
        let mut filter = FilterState::default();
        filter.toggle_tag("Spicy");
        filter.toggle_tag("Sweet");
        filter.toggle_tag("Spicy");
        assert_eq!(filter.selected_tags(), ["Sweet"]);
    }

    #[test]
    fn test_toggle_price_tier() {
        let mut filter = FilterState::default();
        filter.toggle_price_tier(PriceTier::Budget);
        filter.toggle_price_tier(PriceTier::Luxury);
        filter.toggle_price_tier(PriceTier::Budget);
        assert_eq!(filter.price_tiers(), [PriceTier::Luxury]);
    }

    #[test]
    fn test_normalized_query_trims_and_lowercases() {
        let mut filter = FilterState::default();
        filter.set_query("  PiZZa  ");
        assert_eq!(filter.normalized_query(), "pizza");
    }

    #[test]
    fn test_normalized_query_is_truncated() {
        let mut filter = FilterState::default();
        filter.set_query("x".repeat(150));
        assert_eq!(filter.normalized_query().chars().count(), MAX_QUERY_CHARS);
    }

    #[test]
    fn test_from_profile_seeds_tags_and_budget() {
        let profile = UserProfile {
            taste_profile: vec!["Spicy".to_string(), "Umami".to_string()],
            budget_min: 100,
            budget_max: 800,
            ..UserProfile::default()
        };
        let filter = FilterState::from_profile(&profile);
        assert_eq!(filter.selected_tags(), ["Spicy", "Umami"]);
        assert_eq!(filter.price(), PriceBounds::new(100, 800).unwrap());
        assert!(filter.query().is_empty());
    }

    #[test]
    fn test_from_profile_with_inverted_budget_uses_default() {
        let profile = UserProfile {
            budget_min: 900,
            budget_max: 100,
            ..UserProfile::default()
        };
        assert_eq!(FilterState::from_profile(&profile).price(), PriceBounds::DEFAULT);
    }
}
