use anyhow::Result;
use colored::Colorize;

use tastebud_application::{AppContext, MapListing};
use tastebud_infrastructure::TastebudPaths;

use super::render::print_row;

pub fn print_map(listing: &MapListing) {
    println!("{}", "Nearest to you".bright_magenta().bold());
    for record in &listing.nearest {
        print_row(record);
    }
    println!();
    println!(
        "{}",
        format!("All matches ({})", listing.restaurants.len()).bright_magenta()
    );
    for record in &listing.restaurants {
        print_row(record);
    }
}

pub async fn map(paths: TastebudPaths) -> Result<()> {
    let context = AppContext::load(paths).await;
    print_map(&context.discovery.map_listing().await);
    Ok(())
}

pub async fn directions(paths: TastebudPaths, id: &str) -> Result<()> {
    let context = AppContext::load(paths).await;
    println!("{}", context.discovery.directions(id).await?);
    Ok(())
}

pub async fn tags(paths: TastebudPaths) -> Result<()> {
    let context = AppContext::load(paths).await;
    let snapshot = context.discovery.snapshot().await;
    let selected = snapshot.filter().selected_tags();
    for tag in snapshot.catalog().all_tags() {
        if selected.contains(&tag) {
            println!("  {}", tag.bright_green());
        } else {
            println!("  {}", tag);
        }
    }
    Ok(())
}
