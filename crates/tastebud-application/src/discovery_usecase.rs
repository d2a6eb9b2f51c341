//! Discovery use case implementation.
//!
//! Coordinates the catalog provider and the profile store with the
//! synchronous Discover state machine. Remote failures never reach the
//! caller as hard errors on this path: the feed degrades to an empty catalog
//! or the default profile instead.

use anyhow::{Result, anyhow};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use tastebud_core::discovery::{Discovery, DiscoveryAction, DiscoveryOutcome};
use tastebud_core::location::directions_url;
use tastebud_core::restaurant::{Catalog, CatalogRepository, RestaurantRecord};
use tastebud_core::review::{Review, ReviewBook, ReviewDraft};
use tastebud_core::user::{ProfileService, UserProfile};

/// How many restaurants the map view highlights as nearest.
pub const NEAREST_HIGHLIGHT: usize = 3;

/// The map tab: the filtered list plus the closest few.
#[derive(Debug, Clone, Serialize)]
pub struct MapListing {
    pub restaurants: Vec<RestaurantRecord>,
    pub nearest: Vec<RestaurantRecord>,
}

/// Use case for the Discover, Bookmarks, Map and Profile tabs.
pub struct DiscoveryUseCase {
    profile_service: Arc<dyn ProfileService>,
    discovery: RwLock<Discovery>,
    profile: RwLock<UserProfile>,
    reviews: RwLock<ReviewBook>,
}

impl DiscoveryUseCase {
    /// Loads the catalog and profile and seeds the filter from preferences.
    pub async fn start(
        catalog_repository: Arc<dyn CatalogRepository>,
        profile_service: Arc<dyn ProfileService>,
    ) -> Self {
        let records = match catalog_repository.list_all().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to load catalog, starting empty: {}", e);
                Vec::new()
            }
        };

        let profile = match profile_service.load_or_default().await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Failed to load profile, using defaults: {}", e);
                UserProfile::default()
            }
        };

        let discovery = Discovery::from_profile(Catalog::new(records), &profile);
        tracing::info!(
            "Discovery started: {} restaurants, {} candidates",
            discovery.catalog().len(),
            discovery.queue().len()
        );

        Self {
            profile_service,
            discovery: RwLock::new(discovery),
            profile: RwLock::new(profile),
            reviews: RwLock::new(ReviewBook::new()),
        }
    }

    /// Applies one action to the Discover state.
    pub async fn dispatch(&self, action: DiscoveryAction) -> DiscoveryOutcome {
        let outcome = self.discovery.write().await.dispatch(action);
        match &outcome {
            DiscoveryOutcome::Rejected { message } => tracing::debug!("Action rejected: {}", message),
            DiscoveryOutcome::Rebuilt { queue_len } => {
                tracing::debug!("Queue rebuilt with {} candidates", queue_len)
            }
            _ => {}
        }
        outcome
    }

    /// A copy of the current Discover state.
    pub async fn snapshot(&self) -> Discovery {
        self.discovery.read().await.clone()
    }

    pub async fn profile(&self) -> UserProfile {
        self.profile.read().await.clone()
    }

    pub async fn bookmarks(&self) -> Vec<RestaurantRecord> {
        self.discovery.read().await.bookmarks().list().to_vec()
    }

    /// Validates and applies new preferences, then saves them in the
    /// background.
    ///
    /// The filter is reseeded immediately; the returned handle completes
    /// when the save finishes and never carries an error (failures are
    /// logged).
    pub async fn save_preferences(&self, profile: UserProfile) -> Result<JoinHandle<()>> {
        let profile = profile.prepared_for_save()?;

        {
            let mut discovery = self.discovery.write().await;
            discovery.dispatch(DiscoveryAction::SetSelectedTags {
                tags: profile.taste_profile.clone(),
            });
            discovery.dispatch(DiscoveryAction::SetPrice {
                low: profile.budget_min,
                high: profile.budget_max,
            });
        }
        *self.profile.write().await = profile.clone();

        let service = Arc::clone(&self.profile_service);
        Ok(tokio::spawn(async move {
            match service.save(&profile).await {
                Ok(()) => tracing::info!("Preferences saved"),
                Err(e) => tracing::warn!("Failed to save preferences: {}", e),
            }
        }))
    }

    /// Adds a user-submitted restaurant to the live catalog.
    pub async fn add_restaurant(&self, record: RestaurantRecord) -> DiscoveryOutcome {
        self.dispatch(DiscoveryAction::AppendRecord { record }).await
    }

    pub async fn find(&self, restaurant_id: &str) -> Option<RestaurantRecord> {
        self.discovery.read().await.catalog().find(restaurant_id).cloned()
    }

    /// The filtered list with the nearest few highlighted.
    pub async fn map_listing(&self) -> MapListing {
        let discovery = self.discovery.read().await;
        let queue = discovery.queue();
        MapListing {
            restaurants: queue.records().to_vec(),
            nearest: queue.nearest(NEAREST_HIGHLIGHT).into_iter().cloned().collect(),
        }
    }

    /// External maps link for a restaurant's address.
    pub async fn directions(&self, restaurant_id: &str) -> Result<String> {
        let record = self
            .find(restaurant_id)
            .await
            .ok_or_else(|| anyhow!("Restaurant '{}' not found", restaurant_id))?;
        Ok(directions_url(&record.address)?.to_string())
    }

    pub async fn add_review(&self, restaurant_id: &str, draft: ReviewDraft) -> Result<Review> {
        if self.find(restaurant_id).await.is_none() {
            return Err(anyhow!("Restaurant '{}' not found", restaurant_id));
        }
        let review = draft.submit(restaurant_id, Utc::now())?;
        self.reviews.write().await.add(review.clone());
        tracing::info!("Review added for {}", restaurant_id);
        Ok(review)
    }

    /// Reviews for a restaurant, newest first.
    pub async fn reviews(&self, restaurant_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .for_restaurant(restaurant_id)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tastebud_core::TastebudError;
    use tastebud_core::error::Result as CoreResult;
    use tastebud_core::location::Coordinates;
    use tastebud_core::restaurant::PriceTier;
    use tastebud_core::swipe::{SwipeDirection, SwipeInput};
    use tastebud_core::user::InMemoryProfileService;

    struct StaticCatalog(Vec<RestaurantRecord>);

    #[async_trait]
    impl CatalogRepository for StaticCatalog {
        async fn list_all(&self) -> CoreResult<Vec<RestaurantRecord>> {
            Ok(self.0.clone())
        }

        async fn insert(&self, record: &RestaurantRecord) -> CoreResult<RestaurantRecord> {
            Ok(record.clone())
        }
    }

    struct OfflineCatalog;

    #[async_trait]
    impl CatalogRepository for OfflineCatalog {
        async fn list_all(&self) -> CoreResult<Vec<RestaurantRecord>> {
            Err(TastebudError::remote("connection refused"))
        }

        async fn insert(&self, _record: &RestaurantRecord) -> CoreResult<RestaurantRecord> {
            Err(TastebudError::remote("connection refused"))
        }
    }

    fn record(id: &str, tags: &[&str], distance: f64) -> RestaurantRecord {
        RestaurantRecord {
            id: id.to_string(),
            name: format!("Spot {id}"),
            cuisine: "Filipino".to_string(),
            image: String::new(),
            rating: 4.0,
            price_tier: PriceTier::Moderate,
            price_min: 200,
            price_max: 400,
            distance,
            description: String::new(),
            address: format!("{id} Street, Makati"),
            coordinates: Coordinates::DEFAULT,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Arc<dyn CatalogRepository> {
        Arc::new(StaticCatalog(vec![
            record("a", &["Spicy"], 2.0),
            record("b", &["Sweet"], 0.5),
            record("c", &["Spicy", "Savory"], 1.0),
            record("d", &["Umami"], 3.0),
        ]))
    }

    fn saved_profile() -> UserProfile {
        UserProfile {
            name: "Ana".to_string(),
            location: "Makati".to_string(),
            taste_profile: vec!["Spicy".to_string()],
            ..UserProfile::default()
        }
    }

    #[tokio::test]
    async fn test_start_seeds_filter_from_profile() {
        let profiles = Arc::new(InMemoryProfileService::with_profile(saved_profile()));
        let usecase = DiscoveryUseCase::start(catalog(), profiles).await;

        assert_eq!(usecase.snapshot().await.queue().ids(), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_start_degrades_when_catalog_fails() {
        let usecase =
            DiscoveryUseCase::start(Arc::new(OfflineCatalog), Arc::new(InMemoryProfileService::new()))
                .await;

        let snapshot = usecase.snapshot().await;
        assert!(snapshot.catalog().is_empty());
        assert!(snapshot.session().is_exhausted());
    }

    #[tokio::test]
    async fn test_like_then_bookmarks() {
        let usecase = DiscoveryUseCase::start(catalog(), Arc::new(InMemoryProfileService::new())).await;
        usecase
            .dispatch(DiscoveryAction::Swipe {
                input: SwipeInput::Button {
                    direction: SwipeDirection::Right,
                },
            })
            .await;

        let ids: Vec<String> = usecase.bookmarks().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[tokio::test]
    async fn test_save_preferences_reseeds_and_persists() {
        let profiles = Arc::new(InMemoryProfileService::new());
        let usecase = DiscoveryUseCase::start(catalog(), profiles.clone()).await;

        let profile = UserProfile {
            taste_profile: vec!["Umami".to_string()],
            ..saved_profile()
        };
        usecase.save_preferences(profile).await.unwrap().await.unwrap();

        assert_eq!(usecase.snapshot().await.queue().ids(), vec!["d"]);
        let stored = profiles.load().await.unwrap().unwrap();
        assert_eq!(stored.taste_profile, vec!["Umami"]);
    }

    #[tokio::test]
    async fn test_invalid_preferences_change_nothing() {
        let profiles = Arc::new(InMemoryProfileService::new());
        let usecase = DiscoveryUseCase::start(catalog(), profiles.clone()).await;

        let profile = UserProfile {
            budget_min: 900,
            budget_max: 100,
            ..saved_profile()
        };
        assert!(usecase.save_preferences(profile).await.is_err());
        assert_eq!(usecase.snapshot().await.queue().len(), 4);
        assert!(profiles.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_map_listing_highlights_nearest_three() {
        let usecase = DiscoveryUseCase::start(catalog(), Arc::new(InMemoryProfileService::new())).await;
        let listing = usecase.map_listing().await;

        assert_eq!(listing.restaurants.len(), 4);
        let nearest: Vec<&str> = listing.nearest.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(nearest, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_reviews_and_directions() {
        let usecase = DiscoveryUseCase::start(catalog(), Arc::new(InMemoryProfileService::new())).await;

        assert!(usecase.add_review("a", ReviewDraft::new(0, "")).await.is_err());
        assert!(usecase.add_review("zzz", ReviewDraft::new(5, "")).await.is_err());
        usecase.add_review("a", ReviewDraft::new(5, " lovely ")).await.unwrap();
        assert_eq!(usecase.reviews("a").await[0].comment, "lovely");

        let url = usecase.directions("a").await.unwrap();
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
    }
}
