//! Catalog repository trait.

use async_trait::async_trait;

use super::model::RestaurantRecord;
use crate::error::Result;

/// Provider of the restaurant catalog.
///
/// Implementations convert whatever the backing store returns into validated
/// [`RestaurantRecord`]s; rows that fail validation are skipped, not surfaced
/// to the engine.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads every record in catalog order.
    async fn list_all(&self) -> Result<Vec<RestaurantRecord>>;

    /// Appends a new record and returns it as stored.
    async fn insert(&self, record: &RestaurantRecord) -> Result<RestaurantRecord>;
}
