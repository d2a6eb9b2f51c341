//! Candidate queue construction.

use serde::Serialize;

use super::model::FilterState;
use super::predicate;
use crate::restaurant::RestaurantRecord;

/// Ordered candidates for one FilterState, in catalog order.
///
/// Every element satisfied the filter when the queue was built. The queue is
/// never patched; a filter change builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateQueue {
    records: Vec<RestaurantRecord>,
}

impl CandidateQueue {
    /// Applies the filter to every record of the catalog.
    ///
    /// The catalog is only read; the same inputs always produce the same
    /// queue.
    pub fn build(catalog: &[RestaurantRecord], filter: &FilterState) -> Self {
        let records = catalog
            .iter()
            .filter(|record| predicate::matches(record, filter))
            .cloned()
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RestaurantRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &RestaurantRecord> {
        self.records.iter()
    }

    /// Candidate identifiers in queue order.
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// The `n` nearest candidates, closest first (map view highlight).
    pub fn nearest(&self, n: usize) -> Vec<&RestaurantRecord> {
        let mut by_distance: Vec<&RestaurantRecord> = self.records.iter().collect();
        by_distance.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        by_distance.truncate(n);
        by_distance
    }
}
