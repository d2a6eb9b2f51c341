//! Terminal rendering for cards, lists and swipe feedback.

use colored::Colorize;

use tastebud_core::restaurant::RestaurantRecord;
use tastebud_core::swipe::{CardFeedback, SwipeDirection, SwipeEvent};

pub fn print_card(record: &RestaurantRecord, remaining: usize) {
    println!();
    println!(
        "{}  {}",
        record.name.bright_white().bold(),
        format!("({} left)", remaining).bright_black()
    );
    println!(
        "  {} · {} · ₱{}-{} · ★ {:.1} · {:.1} km",
        record.cuisine.cyan(),
        record.price_tier.to_string().yellow(),
        record.price_min,
        record.price_max,
        record.rating,
        record.distance
    );
    if !record.description.is_empty() {
        println!("  {}", record.description);
    }
    if !record.tags.is_empty() {
        println!("  {}", format!("#{}", record.tags.join(" #")).bright_black());
    }
}

/// One-line summary for list views.
pub fn print_row(record: &RestaurantRecord) {
    println!(
        "  {} {} {} {}",
        format!("[{}]", record.id).bright_black(),
        record.name.bright_white(),
        record.price_tier.to_string().yellow(),
        format!("{:.1} km · {}", record.distance, record.address).bright_black()
    );
}

pub fn print_feedback(feedback: &CardFeedback) {
    let badge = match feedback.badge {
        Some(SwipeDirection::Right) => "LIKE".bright_green().bold().to_string(),
        Some(SwipeDirection::Left) => "NOPE".bright_red().bold().to_string(),
        None => String::new(),
    };
    println!(
        "  {} {}",
        format!(
            "tilt {:+.1}° opacity {:.2}",
            feedback.rotation_deg, feedback.opacity
        )
        .bright_black(),
        badge
    );
}

pub fn print_event(event: &SwipeEvent) {
    match event {
        SwipeEvent::Liked { record } => {
            println!("{}", format!("♥ Saved {}", record.name).bright_green())
        }
        SwipeEvent::Skipped { record } => {
            println!("{}", format!("✗ Skipped {}", record.name).bright_red())
        }
        SwipeEvent::Cancelled => println!("{}", "Not far enough, card snaps back".bright_black()),
        SwipeEvent::Ignored => println!("{}", "Nothing to swipe".bright_black()),
        SwipeEvent::Tracking { .. } => {}
    }
}

pub fn print_exhausted(bookmarks: usize) {
    println!();
    println!("{}", "That's everyone for now!".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "{} saved. Loosen the filters or type 'reset' to start over.",
            bookmarks
        )
        .bright_black()
    );
}
