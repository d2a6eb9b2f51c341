use serde::{Deserialize, Serialize};

use crate::bookmark::BookmarkSet;
use crate::filter::{CandidateQueue, FilterState, PriceBounds};
use crate::restaurant::{Catalog, PriceTier, RestaurantRecord};
use crate::swipe::{SwipeEvent, SwipeInput, SwipeSession};
use crate::user::UserProfile;

/// Everything the Discover feed can be asked to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscoveryAction {
    ToggleTag { tag: String },
    SetSelectedTags { tags: Vec<String> },
    SetPrice { low: u32, high: u32 },
    SetQuery { query: String },
    TogglePriceTier { tier: PriceTier },
    /// Drops every filter criterion back to the defaults.
    ResetFilter,
    Swipe { input: SwipeInput },
    RemoveBookmark { id: String },
    AppendRecord { record: RestaurantRecord },
}

/// Result of dispatching one [`DiscoveryAction`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscoveryOutcome {
    /// The filter changed; a fresh queue and session replaced the old ones.
    Rebuilt { queue_len: usize },
    /// A swipe input went through the session.
    Swiped { event: SwipeEvent },
    BookmarkRemoved { removed: bool },
    /// The action was rejected before any mutation.
    Rejected { message: String },
}

/// Discover feed state: catalog, filter, the session over the current
/// queue, and the bookmarks liked so far.
///
/// All transitions are synchronous. Any filter change recomputes the queue
/// from the catalog and starts a new session at index 0; bookmarks survive
/// rebuilds.
#[derive(Debug, Clone)]
pub struct Discovery {
    catalog: Catalog,
    filter: FilterState,
    session: SwipeSession,
    bookmarks: BookmarkSet,
}

impl Discovery {
    pub fn new(catalog: Catalog, filter: FilterState) -> Self {
        let session = SwipeSession::new(CandidateQueue::build(catalog.records(), &filter));
        Self {
            catalog,
            filter,
            session,
            bookmarks: BookmarkSet::new(),
        }
    }

    /// Starts discovery with the filter seeded from stored preferences.
    pub fn from_profile(catalog: Catalog, profile: &UserProfile) -> Self {
        Self::new(catalog, FilterState::from_profile(profile))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn queue(&self) -> &CandidateQueue {
        self.session.queue()
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn current(&self) -> Option<&RestaurantRecord> {
        self.session.current()
    }

    /// Applies one action.
    pub fn dispatch(&mut self, action: DiscoveryAction) -> DiscoveryOutcome {
        match action {
            DiscoveryAction::ToggleTag { tag } => {
                self.filter.toggle_tag(&tag);
                self.recompute()
            }
            DiscoveryAction::SetSelectedTags { tags } => {
                self.filter.set_selected_tags(tags);
                self.recompute()
            }
            DiscoveryAction::SetPrice { low, high } => match PriceBounds::new(low, high) {
                Ok(bounds) => {
                    self.filter.set_price(bounds);
                    self.recompute()
                }
                Err(e) => DiscoveryOutcome::Rejected {
                    message: e.to_string(),
                },
            },
            DiscoveryAction::SetQuery { query } => {
                self.filter.set_query(query);
                self.recompute()
            }
            DiscoveryAction::TogglePriceTier { tier } => {
                self.filter.toggle_price_tier(tier);
                self.recompute()
            }
            DiscoveryAction::ResetFilter => {
                self.filter = FilterState::default();
                self.recompute()
            }
            DiscoveryAction::Swipe { input } => {
                let event = self.session.apply(input);
                if let SwipeEvent::Liked { record } = &event {
                    self.bookmarks.add(record.clone());
                }
                DiscoveryOutcome::Swiped { event }
            }
            DiscoveryAction::RemoveBookmark { id } => DiscoveryOutcome::BookmarkRemoved {
                removed: self.bookmarks.remove(&id),
            },
            DiscoveryAction::AppendRecord { record } => {
                if let Err(e) = record.validate() {
                    return DiscoveryOutcome::Rejected {
                        message: e.to_string(),
                    };
                }
                if self.catalog.find(&record.id).is_some() {
                    return DiscoveryOutcome::Rejected {
                        message: format!("Restaurant '{}' is already in the catalog", record.id),
                    };
                }
                self.catalog = self.catalog.with_appended(record);
                self.recompute()
            }
        }
    }

    /// Rebuilds the queue from the catalog under the current filter and
    /// replaces the session.
    pub fn recompute(&mut self) -> DiscoveryOutcome {
        let queue = CandidateQueue::build(self.catalog.records(), &self.filter);
        let queue_len = queue.len();
        self.session = SwipeSession::new(queue);
        DiscoveryOutcome::Rebuilt { queue_len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::fixtures::record;
    use crate::swipe::{SwipeDirection, SwipeState};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            record("a", &["Spicy"], 100, 200),
            record("b", &["Sweet"], 150, 250),
            record("c", &["Savory"], 300, 400),
        ])
    }

    fn like() -> DiscoveryAction {
        DiscoveryAction::Swipe {
            input: SwipeInput::Button {
                direction: SwipeDirection::Right,
            },
        }
    }

    #[test]
    fn test_filter_change_starts_new_session() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        discovery.dispatch(like());
        assert_eq!(discovery.session().state(), SwipeState::Active { index: 1 });

        let outcome = discovery.dispatch(DiscoveryAction::ToggleTag {
            tag: "Sweet".to_string(),
        });
        assert_eq!(outcome, DiscoveryOutcome::Rebuilt { queue_len: 1 });
        assert_eq!(discovery.session().state(), SwipeState::Active { index: 0 });
        assert_eq!(discovery.bookmarks().len(), 1);
    }

    #[test]
    fn test_like_bookmarks_current_card() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        discovery.dispatch(like());
        assert!(discovery.bookmarks().contains("a"));
        assert_eq!(discovery.current().map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn test_inverted_price_is_rejected_without_mutation() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        discovery.dispatch(like());

        let outcome = discovery.dispatch(DiscoveryAction::SetPrice {
            low: 500,
            high: 100,
        });
        assert!(matches!(outcome, DiscoveryOutcome::Rejected { .. }));
        assert_eq!(discovery.filter().price(), PriceBounds::DEFAULT);
        assert_eq!(discovery.session().state(), SwipeState::Active { index: 1 });
    }

    #[test]
    fn test_from_profile_seeds_filter() {
        let profile = UserProfile {
            taste_profile: vec!["Savory".to_string()],
            budget_min: 250,
            budget_max: 1000,
            ..UserProfile::default()
        };
        let discovery = Discovery::from_profile(catalog(), &profile);
        assert_eq!(discovery.queue().ids(), vec!["c"]);
    }

    #[test]
    fn test_append_record_rebuilds_queue() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        let outcome = discovery.dispatch(DiscoveryAction::AppendRecord {
            record: record("d", &["Umami"], 200, 500),
        });
        assert_eq!(outcome, DiscoveryOutcome::Rebuilt { queue_len: 4 });
        assert_eq!(discovery.catalog().len(), 4);
    }

    #[test]
    fn test_append_duplicate_keeps_session() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        let skip = DiscoveryAction::Swipe {
            input: SwipeInput::Button {
                direction: SwipeDirection::Left,
            },
        };
        discovery.dispatch(skip.clone());
        discovery.dispatch(skip);

        let outcome = discovery.dispatch(DiscoveryAction::AppendRecord {
            record: record("a", &["Umami"], 200, 500),
        });
        assert!(matches!(outcome, DiscoveryOutcome::Rejected { .. }));
        assert_eq!(discovery.catalog().len(), 3);
        assert_eq!(discovery.session().state(), SwipeState::Active { index: 2 });
    }

    #[test]
    fn test_append_invalid_record_is_rejected() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        discovery.dispatch(like());

        let mut bad = record("bad", &["Spicy", "Spicy"], 900, 100);
        bad.rating = 42.0;
        let outcome = discovery.dispatch(DiscoveryAction::AppendRecord { record: bad });

        assert!(matches!(outcome, DiscoveryOutcome::Rejected { .. }));
        assert_eq!(discovery.catalog().len(), 3);
        assert!(discovery.catalog().find("bad").is_none());
        assert_eq!(discovery.session().state(), SwipeState::Active { index: 1 });
    }

    #[test]
    fn test_remove_bookmark() {
        let mut discovery = Discovery::new(catalog(), FilterState::default());
        discovery.dispatch(like());
        assert_eq!(
            discovery.dispatch(DiscoveryAction::RemoveBookmark { id: "a".to_string() }),
            DiscoveryOutcome::BookmarkRemoved { removed: true }
        );
        assert_eq!(
            discovery.dispatch(DiscoveryAction::RemoveBookmark { id: "a".to_string() }),
            DiscoveryOutcome::BookmarkRemoved { removed: false }
        );
    }
}
