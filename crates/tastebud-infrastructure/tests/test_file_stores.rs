use tastebud_core::config::AppConfig;
use tastebud_core::discovery::Discovery;
use tastebud_core::restaurant::{Catalog, CatalogRepository};
use tastebud_core::user::{OnboardingForm, ProfileService};
use tastebud_infrastructure::{FileCatalogRepository, FileProfileRepository, TastebudPaths};
use tempfile::TempDir;

#[tokio::test]
async fn test_onboarding_profile_seeds_discovery_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let paths = TastebudPaths::with_root(temp_dir.path());
    let config = AppConfig::default();

    let mut form = OnboardingForm::new();
    form.name = "Ana".to_string();
    form.location = "Makati".to_string();
    form.next().unwrap();
    for tag in ["Ramen", "Pizza", "Vegan"] {
        form.toggle_tag(tag);
    }
    let profile = form.finish().unwrap();

    let profiles = FileProfileRepository::new(&paths);
    profiles.save(&profile).await.unwrap();
    let loaded = profiles.load_or_default().await.unwrap();

    let catalog = FileCatalogRepository::new(paths.catalog_file(&config))
        .list_all()
        .await
        .unwrap();
    let discovery = Discovery::from_profile(Catalog::new(catalog), &loaded);

    let ids = discovery.queue().ids();
    assert!(!ids.is_empty());
    for record in discovery.queue().iter() {
        assert!(
            record.tags.iter().any(|t| ["Ramen", "Pizza", "Vegan"].contains(&t.as_str())),
            "{} should match a taste tag",
            record.name
        );
    }
}
