//! Filter predicates.
//!
//! Each dimension is a pure function of `(record, filter)`; a record is a
//! candidate when every dimension passes.

use super::model::FilterState;
use crate::restaurant::RestaurantRecord;

/// Passes when no tag is selected or the record has any selected tag.
pub fn matches_tags(record: &RestaurantRecord, filter: &FilterState) -> bool {
    let selected = filter.selected_tags();
    selected.is_empty() || record.tags.iter().any(|tag| selected.contains(tag))
}

/// Range-overlap test between the record's price range and the bounds.
pub fn matches_price(record: &RestaurantRecord, filter: &FilterState) -> bool {
    let bounds = filter.price();
    record.price_min <= bounds.high() && record.price_max >= bounds.low()
}

/// Passes when no tier is selected or the record's tier is selected.
pub fn matches_price_tier(record: &RestaurantRecord, filter: &FilterState) -> bool {
    let tiers = filter.price_tiers();
    tiers.is_empty() || tiers.contains(&record.price_tier)
}

/// Case-insensitive substring search over name, cuisine, description and tags.
pub fn matches_query(record: &RestaurantRecord, filter: &FilterState) -> bool {
    let query = filter.normalized_query();
    if query.is_empty() {
        return true;
    }
    let hit = |text: &str| text.to_lowercase().contains(&query);

    hit(&record.name)
        || hit(&record.cuisine)
        || hit(&record.description)
        || record.tags.iter().any(|tag| hit(tag))
}

/// The combined candidate predicate.
pub fn matches(record: &RestaurantRecord, filter: &FilterState) -> bool {
    matches_query(record, filter)
        && matches_tags(record, filter)
        && matches_price(record, filter)
        && matches_price_tier(record, filter)
}
