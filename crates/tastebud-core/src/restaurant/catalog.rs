//! Read-only restaurant catalog shared between views.

use std::sync::Arc;

use super::model::RestaurantRecord;

/// An immutable, cheaply clonable collection of restaurant records.
///
/// The Discover feed and the map list read the same catalog concurrently;
/// nothing in the engine mutates it, so it is shared through an `Arc`
/// without locking. Appending produces a new catalog value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<[RestaurantRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by identifier.
    pub fn find(&self, id: &str) -> Option<&RestaurantRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns a new catalog with `record` appended at the end.
    ///
    /// A record whose id already exists replaces nothing and is ignored.
    pub fn with_appended(&self, record: RestaurantRecord) -> Self {
        if self.find(&record.id).is_some() {
            return self.clone();
        }
        let mut records = self.records.to_vec();
        records.push(record);
        Self::new(records)
    }

    /// All distinct tags in first-seen order, for building the filter bar.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}

impl From<Vec<RestaurantRecord>> for Catalog {
    fn from(records: Vec<RestaurantRecord>) -> Self {
        Self::new(records)
    }
}
