//! Restaurant domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, TastebudError};
use crate::location::Coordinates;

/// Ordinal price band shown on restaurant cards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum PriceTier {
    #[serde(rename = "$")]
    #[strum(serialize = "$")]
    Budget,
    #[default]
    #[serde(rename = "$$")]
    #[strum(serialize = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    #[strum(serialize = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    #[strum(serialize = "$$$$")]
    Luxury,
}

impl PriceTier {
    /// Price range the add form suggests when this tier is picked.
    pub fn default_range(self) -> (u32, u32) {
        match self {
            PriceTier::Budget => (50, 200),
            PriceTier::Moderate => (200, 500),
            PriceTier::Upscale => (500, 1200),
            PriceTier::Luxury => (1000, 2000),
        }
    }
}

/// One discoverable venue.
///
/// Records are produced by a catalog provider and never mutated by the
/// discovery engine. Construct them through [`RestaurantRecord::validate`]
/// (or the infrastructure parsers, which call it) so the invariants below
/// hold everywhere else:
///
/// - `rating` is within `0.0..=5.0`
/// - `price_min < price_max`
/// - `distance` is non-negative
/// - `coordinates` is a valid latitude/longitude pair
/// - `tags` contain no duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    /// Image URL (remote, `file://`, or a `data:` preview).
    pub image: String,
    pub rating: f64,
    pub price_tier: PriceTier,
    pub price_min: u32,
    pub price_max: u32,
    /// Distance from the user, in the client's distance unit.
    pub distance: f64,
    pub description: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub tags: Vec<String>,
}

impl RestaurantRecord {
    pub const MAX_RATING: f64 = 5.0;

    /// Checks the record invariants, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TastebudError::validation("id", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(TastebudError::validation("name", "must not be empty"));
        }
        if !(0.0..=Self::MAX_RATING).contains(&self.rating) {
            return Err(TastebudError::validation(
                "rating",
                format!("{} is outside 0.0..=5.0", self.rating),
            ));
        }
        if self.price_min >= self.price_max {
            return Err(TastebudError::validation(
                "price",
                "minimum price must be less than maximum price",
            ));
        }
        if !(self.distance >= 0.0) {
            return Err(TastebudError::validation(
                "distance",
                "must be a non-negative number",
            ));
        }
        self.coordinates.validate()?;

        let mut seen = std::collections::HashSet::new();
        if let Some(duplicate) = self.tags.iter().find(|tag| !seen.insert(tag.as_str())) {
            return Err(TastebudError::validation(
                "tags",
                format!("duplicate tag '{duplicate}'"),
            ));
        }

        Ok(())
    }

    /// Returns true if the record carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a valid record with the given id, tags and price range.
    pub fn record(id: &str, tags: &[&str], price_min: u32, price_max: u32) -> RestaurantRecord {
        RestaurantRecord {
            id: id.to_string(),
            name: format!("Restaurant {id}"),
            cuisine: "Filipino".to_string(),
            image: format!("https://images.example.com/{id}.jpg"),
            rating: 4.5,
            price_tier: PriceTier::Moderate,
            price_min,
            price_max,
            distance: 1.2,
            description: "A neighborhood favorite".to_string(),
            address: "123 Ayala Ave, Makati".to_string(),
            coordinates: Coordinates::new(14.5547, 121.0244),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}
