use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use tastebud_application::{AppContext, ImageSource};
use tastebud_core::location::Coordinates;
use tastebud_core::restaurant::{PriceTier, RestaurantDraft};
use tastebud_infrastructure::TastebudPaths;
use tastebud_infrastructure::local_image_store::read_image;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    /// Photo of the place (PNG, JPEG, ...; max 5MB)
    #[arg(long)]
    pub image: PathBuf,
    #[arg(long, default_value = "")]
    pub cuisine: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Price tier; also suggests a price range
    #[arg(long)]
    pub tier: Option<PriceTier>,
    #[arg(long)]
    pub min: Option<u32>,
    #[arg(long)]
    pub max: Option<u32>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Look the address up and use its coordinates
    #[arg(long, conflicts_with = "lat")]
    pub geocode: bool,
}

impl AddArgs {
    fn draft(&self) -> RestaurantDraft {
        let mut draft = RestaurantDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            cuisine: self.cuisine.clone(),
            description: self.description.clone(),
            ..RestaurantDraft::default()
        };
        if let Some(tier) = self.tier {
            draft.set_price_tier(tier);
        }
        if let Some(min) = self.min {
            draft.price_min = min;
        }
        if let Some(max) = self.max {
            draft.price_max = max;
        }
        for tag in &self.tags {
            draft.toggle_tag(tag);
        }
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            draft.coordinates = Coordinates::new(lat, lng);
        }
        draft
    }
}

pub async fn run(paths: TastebudPaths, args: AddArgs) -> Result<()> {
    let mut draft = args.draft();
    draft.validate()?;
    let image = read_image(&args.image).await?;

    let context = AppContext::load(paths).await;

    if args.geocode {
        match context.submissions.geocode_address(&draft.address).await {
            Ok(Some(coordinates)) => {
                println!(
                    "{}",
                    format!(
                        "Located at {:.4}, {:.4}",
                        coordinates.latitude, coordinates.longitude
                    )
                    .bright_black()
                );
                draft.coordinates = coordinates;
            }
            Ok(None) => println!(
                "{}",
                "Address not found. Keeping the default location.".yellow()
            ),
            Err(e) => eprintln!("{}", format!("Could not geocode: {}", e).yellow()),
        }
    }

    let outcome = context.submissions.submit(draft, image).await?;

    println!(
        "{}",
        format!("Added {} [{}]", outcome.record.name, outcome.record.id)
            .bright_green()
            .bold()
    );
    if outcome.image_source == ImageSource::Inline {
        println!("{}", "Image upload failed; the photo was embedded instead.".yellow());
    }
    if !outcome.persisted {
        println!(
            "{}",
            "Could not save to the catalog; it will be gone next time.".yellow()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AddArgs {
        AddArgs {
            name: "Kanto Silog".to_string(),
            address: "14 Jupiter St".to_string(),
            image: PathBuf::from("silog.jpg"),
            cuisine: String::new(),
            description: String::new(),
            tier: None,
            min: None,
            max: None,
            tags: vec!["Breakfast".to_string(), "Breakfast".to_string()],
            lat: None,
            lng: None,
            geocode: false,
        }
    }

    #[test]
    fn test_tier_suggests_range_and_explicit_prices_win() {
        let draft = AddArgs {
            tier: Some(PriceTier::Luxury),
            ..args()
        }
        .draft();
        assert_eq!((draft.price_min, draft.price_max), (1000, 2000));

        let draft = AddArgs {
            tier: Some(PriceTier::Luxury),
            max: Some(3000),
            ..args()
        }
        .draft();
        assert_eq!((draft.price_min, draft.price_max), (1000, 3000));
    }

    #[test]
    fn test_repeated_tag_toggles_off() {
        assert!(args().draft().tags.is_empty());
    }

    #[test]
    fn test_explicit_coordinates() {
        let draft = AddArgs {
            lat: Some(14.6),
            lng: Some(121.0),
            ..args()
        }
        .draft();
        assert_eq!(draft.coordinates, Coordinates::new(14.6, 121.0));
        assert_eq!(args().draft().coordinates, Coordinates::DEFAULT);
    }
}
