//! Bookmarked restaurants.
//!
//! Bookmarks live in memory for the browsing session only; nothing writes
//! them to the profile store.

use serde::{Deserialize, Serialize};

use crate::restaurant::RestaurantRecord;

/// Liked restaurants, unique by identifier, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkSet {
    entries: Vec<RestaurantRecord>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record unless its id is already bookmarked.
    ///
    /// Returns `true` if the set changed.
    pub fn add(&mut self, record: RestaurantRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.entries.push(record);
        true
    }

    /// Removes the record with this id; absent ids are a no-op.
    ///
    /// Returns `true` if the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    /// Members in insertion order.
    pub fn list(&self) -> &[RestaurantRecord] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&RestaurantRecord> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::fixtures::record;

    #[test]
    fn test_add_is_idempotent() {
        let mut once = BookmarkSet::new();
        once.add(record("a", &[], 100, 200));

        let mut twice = BookmarkSet::new();
        assert!(twice.add(record("a", &[], 100, 200)));
        assert!(!twice.add(record("a", &[], 100, 200)));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = BookmarkSet::new();
        set.add(record("a", &[], 100, 200));
        let before = set.clone();

        assert!(!set.remove("missing"));
        assert_eq!(set, before);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut set = BookmarkSet::new();
        set.add(record("b", &[], 100, 200));
        set.add(record("a", &[], 100, 200));
        set.add(record("c", &[], 100, 200));
        set.remove("a");

        let ids: Vec<&str> = set.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
